use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("country_report=info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(LocalTime::new(format_description!(
                    "[hour]:[minute]:[second].[subsecond digits:3]"
                )))
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(workers) = args.workers {
        if workers == 0 {
            anyhow::bail!("--workers must be greater than 0");
        }
    }

    if args.input.as_os_str().is_empty() {
        anyhow::bail!("--input must not be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("--output must not be empty");
    }

    Ok(())
}
