use color_eyre::Result;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

/// Installs the eyre report handler and a panic hook.
///
/// Release builds print a human-panic report, debug builds a full backtrace.
pub fn init_errors() -> Result<()> {
    let hooks = color_eyre::config::HookBuilder::default().display_location_section(false);

    #[cfg(not(debug_assertions))]
    {
        let (panic_hook, eyre_hook) = hooks.into_hooks();
        eyre_hook.install()?;

        std::panic::set_hook(Box::new(move |panic_info| {
            use human_panic::{
                handle_dump,
                print_msg,
                Metadata,
            };
            let metadata = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&metadata, panic_info);
            print_msg(file_path, &metadata).ok();
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }));
    }

    #[cfg(debug_assertions)]
    {
        // Replaces the color-eyre panic hook installed alongside the report handler.
        hooks.install()?;
        std::panic::set_hook(Box::new(|panic_info| {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }));
    }

    Ok(())
}

/// Logs to stderr. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;

    Ok(())
}
