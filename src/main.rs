use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use restaurant_menu::utils::{logger, validation::Validate};
use restaurant_menu::{
    CliConfig, Clock, Command, FixedClock, MenuItem, OutputFormat, Restaurant,
    RestaurantDirectory, RestaurantError, RestaurantsConfig, SystemClock,
};
use serde::Serialize;

#[derive(Serialize)]
struct RestaurantView<'a> {
    name: &'a str,
    location: &'a str,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu: Option<&'a [MenuItem]>,
}

impl<'a> RestaurantView<'a> {
    fn new<C: Clock>(restaurant: &'a Restaurant<C>, with_menu: bool) -> Self {
        Self {
            name: restaurant.name(),
            location: restaurant.location(),
            opening_time: restaurant.opening_time(),
            closing_time: restaurant.closing_time(),
            open: restaurant.is_open(),
            menu: with_menu.then(|| restaurant.menu()),
        }
    }
}

fn main() {
    // Usage errors exit 1 so that 2 stays reserved for unknown restaurants and items.
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting restaurant-menu");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        let exit_code = match e.downcast_ref::<RestaurantError>() {
            Some(err) => {
                tracing::error!("❌ {:#}", e);
                tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
                if e.chain().count() > 1 {
                    eprintln!("❌ {}: {}", e, err.user_friendly_message());
                } else {
                    eprintln!("❌ {}", err.user_friendly_message());
                }
                eprintln!("💡 {}", err.recovery_suggestion());
                if err.is_not_found() {
                    2
                } else {
                    1
                }
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    tracing::info!("📁 Loading restaurants from: {}", cli.config);
    let config = RestaurantsConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load config file '{}'", cli.config))?;
    config.validate()?;
    tracing::info!("✅ Loaded {} restaurant(s)", config.restaurants.len());

    match cli.at {
        Some(at) => {
            tracing::info!("🕒 Evaluating at {}", at);
            execute(cli, &config.build_directory(FixedClock(at))?)?
        }
        None => execute(cli, &config.build_directory(SystemClock)?)?,
    }

    Ok(())
}

fn execute<C: Clock>(
    cli: &CliConfig,
    directory: &RestaurantDirectory<C>,
) -> restaurant_menu::Result<()> {
    match &cli.command {
        Command::List => {
            let views: Vec<RestaurantView> = directory
                .restaurants()
                .iter()
                .map(|restaurant| RestaurantView::new(restaurant, false))
                .collect();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
                OutputFormat::Text => {
                    for view in &views {
                        println!(
                            "{} ({}) {}-{} [{}]",
                            view.name,
                            view.location,
                            view.opening_time,
                            view.closing_time,
                            open_label(view.open)
                        );
                    }
                }
            }
        }
        Command::Status { restaurant } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&RestaurantView::new(restaurant, false))?
                ),
                OutputFormat::Text => println!(
                    "{} is {}",
                    restaurant.name(),
                    open_label(restaurant.is_open())
                ),
            }
        }
        Command::Menu { restaurant } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&RestaurantView::new(restaurant, true))?
                ),
                OutputFormat::Text => println!("{}", restaurant),
            }
        }
        Command::Order { restaurant, items } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            if !restaurant.is_open() {
                tracing::warn!("{} is currently closed", restaurant.name());
            }
            let summary = restaurant.order_summary(items.as_slice())?;
            tracing::debug!("Order total for {}: {}", summary.restaurant, summary.total);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => {
                    for item in &summary.items {
                        println!("{}", item);
                    }
                    println!("Total:{}", summary.total);
                }
            }
        }
    }

    Ok(())
}

fn open_label(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}
