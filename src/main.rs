// lpor-pdf: Render Louisiana abuse prevention order forms to PDF

use clap::{Parser, ValueEnum};
use log::debug;

use lpor_pdf::{generate, AppError, CourtPrefill, FormData, FormKind};

// ============================================================================
// Arguments
// ============================================================================

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormArg {
    /// LPOR 14, order to modify or dissolve a prior order
    Lpor14,
    /// LPOR F, confidential address form
    LporF,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Lpor14 => FormKind::Lpor14,
            FormArg::LporF => FormKind::LporF,
        }
    }
}

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render Louisiana abuse prevention order forms to PDF")]
struct Args {
    /// Form template to fill
    #[arg(short, long, value_enum)]
    form: FormArg,

    /// Form data as JSON (camelCase keys, as saved by the intake form)
    #[arg(short, long)]
    input: String,

    /// Output filename (defaults to the form's file name plus docket number)
    #[arg(short, long)]
    output: Option<String>,

    /// Court name, used when the form data leaves it blank
    #[arg(long)]
    court: Option<String>,

    /// Docket number, used when the form data leaves it blank
    #[arg(long)]
    docket: Option<String>,

    /// Division, used when the form data leaves it blank
    #[arg(long)]
    division: Option<String>,

    /// Filed date (YYYY-MM-DD), used when the form data leaves it blank
    #[arg(long)]
    filed_date: Option<String>,

    /// Parish or city (LPOR F only), used when the form data leaves it blank
    #[arg(long)]
    parish_city: Option<String>,

    /// Log every painted section
    #[arg(short, long)]
    verbose: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("{:?}", args);

    let json = std::fs::read_to_string(&args.input)
        .map_err(|e| AppError::InputError(format!("{}: {}", args.input, e)))?;
    let mut form = FormData::from_json(args.form.into(), &json)?;

    let prefill = CourtPrefill {
        court_name: args.court,
        docket_number: args.docket,
        division: args.division,
        filed_date: args.filed_date,
        parish_city: args.parish_city,
    };
    if !prefill.is_empty() {
        prefill.apply(form.court_mut());
    }

    let output_file = args.output.unwrap_or_else(|| form.default_file_name());

    let pdf = generate(&form)?;
    pdf.save(&output_file)?;

    let template = form.template();
    println!("✓ Generated: {}", output_file);
    println!("  Form: {} {}", template.form_name, template.version);
    if let Some(docket) = form.court().docket_number.as_deref() {
        println!("  Docket: {}", docket);
    }
    println!("  Size: {} bytes", pdf.len());

    Ok(())
}
