use clap::Parser;
use minor_ren::config::{Command, ConfigProvider, Settings};
use minor_ren::utils::logger;
use minor_ren::{
    start_by_random, start_by_random_with, start_by_time, start_by_time_at, CliConfig,
    MinorRenError, MinorRenResult, Result, RngEntropy,
};

fn main() {
    let config = CliConfig::parse();

    let file_config = match config.load_config_file() {
        Ok(file_config) => file_config,
        Err(e) => {
            init_logging(&config, config.verbose);
            fail(e);
        }
    };

    let mut layers: Vec<&dyn ConfigProvider> = Vec::new();
    layers.push(&config);
    if let Some(file_config) = &file_config {
        layers.push(file_config);
    }

    let settings = match Settings::resolve(&layers) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&config, config.verbose);
            fail(e);
        }
    };

    // 初始化日誌
    init_logging(&config, settings.verbose);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let output = run(&config.command, &settings)
        .and_then(|result| settings.format.render(&result));

    match output {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e),
    }
}

fn init_logging(config: &CliConfig, verbose: bool) {
    if config.log_json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
}

fn run(command: &Command, settings: &Settings) -> Result<MinorRenResult> {
    match *command {
        Command::Calc { x, y, z } => MinorRenResult::new(x, y, z),
        Command::Random { seed, .. } => {
            let (min, max) = (Some(settings.range.min), Some(settings.range.max));
            match seed {
                Some(seed) => {
                    tracing::info!("Using seeded entropy (seed = {})", seed);
                    start_by_random_with(&mut RngEntropy::seeded(seed), min, max)
                }
                None => start_by_random(min, max),
            }
        }
        Command::Time { at } => match at {
            Some(at) => start_by_time_at(&at),
            None => start_by_time(),
        },
    }
}

fn fail(e: MinorRenError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
