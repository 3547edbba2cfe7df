//! # factory-erp
//!
//! Every command runs the same way a page visit does: load the order list,
//! apply at most one operation, then print the resulting view. Failures print
//! an alert to stderr and exit non-zero.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use factory_erp::config::DashboardConfig;
use factory_erp::lifecycle::tracing::setup_tracing;
use factory_erp::lifecycle::Dashboard;
use factory_erp::model::{OrderField, OrderId};
use factory_erp::view::{Alert, Layout, Summary};
use std::process::ExitCode;
use tracing::{error, info, Instrument};

fn cli() -> Command {
    Command::new("factory-erp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Factory ERP order dashboard")
        .subcommand_required(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .env("FACTORY_ERP_API_URL")
                .global(true)
                .help("Root URL of the order service"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("YAML config file"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_parser(value_parser!(u64))
                .global(true)
                .help("Per-request timeout in seconds"),
        )
        .subcommand(
            Command::new("list")
                .about("Show orders")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .default_value("")
                        .help("Only customers whose name contains this text (case-insensitive)"),
                )
                .arg(
                    Arg::new("layout")
                        .long("layout")
                        .value_parser(value_parser!(Layout))
                        .help("table or cards"),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .action(ArgAction::SetTrue)
                        .help("Show total / completed / pending counts"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new order")
                .arg(required("customer", "Customer name"))
                .arg(required("product", "Product"))
                .arg(required("gauge", "Gauge"))
                .arg(required("size", "Size"))
                .arg(required("quantity", "Quantity")),
        )
        .subcommand(
            Command::new("complete")
                .about("Mark an order as completed")
                .arg(Arg::new("id").required(true).help("Order id")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an order")
                .arg(Arg::new("id").required(true).help("Order id")),
        )
        .subcommand(
            Command::new("summary")
                .about("Show order counts")
                .arg(json_flag()),
        )
}

fn required(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn load_config(matches: &ArgMatches) -> Result<DashboardConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DashboardConfig::load_from_yaml(path).map_err(|e| e.to_string())?,
        None => DashboardConfig::default(),
    };
    let layout = match matches.subcommand() {
        Some(("list", args)) => args.get_one::<Layout>("layout").copied(),
        _ => None,
    };
    config.merge_overrides(
        matches.get_one::<String>("api-url").map(String::as_str),
        matches.get_one::<u64>("timeout").copied(),
        layout,
    );
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Output of a command, printed after the store has shut down.
enum Output {
    View,
    Json(String),
    Text(String),
}

async fn execute(dashboard: &mut Dashboard, matches: &ArgMatches) -> Result<Output, Alert> {
    dashboard
        .load()
        .await
        .map_err(|e| Alert::new("load orders", &e))?;

    match matches.subcommand() {
        Some(("list", args)) => {
            let search = args.get_one::<String>("search").cloned().unwrap_or_default();
            if args.get_flag("json") {
                let orders = dashboard
                    .order_client
                    .search(&search)
                    .await
                    .map_err(|e| Alert::new("search orders", &e))?;
                let json = serde_json::to_string_pretty(&orders)
                    .map_err(|e| Alert::from_message("encode orders", e))?;
                return Ok(Output::Json(json));
            }
            dashboard.view.search = search;
            dashboard.view.show_summary = args.get_flag("summary");
        }
        Some(("create", args)) => {
            dashboard.form.open();
            for (field, arg) in [
                (OrderField::CustomerName, "customer"),
                (OrderField::Product, "product"),
                (OrderField::Gauge, "gauge"),
                (OrderField::Size, "size"),
                (OrderField::Quantity, "quantity"),
            ] {
                let value = args.get_one::<String>(arg).cloned().unwrap_or_default();
                dashboard.form.set(field, value);
            }
            let span = tracing::info_span!("order_form");
            let order = dashboard
                .form
                .submit(&dashboard.order_client)
                .instrument(span)
                .await
                .map_err(|e| Alert::new("create order", &e))?;
            info!(id = ?order.id, "Order submitted");
        }
        Some(("complete", args)) => {
            let id = order_id(args);
            dashboard
                .order_client
                .complete_order(id)
                .await
                .map_err(|e| Alert::new("complete order", &e))?;
        }
        Some(("delete", args)) => {
            let id = order_id(args);
            dashboard
                .order_client
                .delete_order(id)
                .await
                .map_err(|e| Alert::new("delete order", &e))?;
        }
        Some(("summary", args)) => {
            let summary: Summary = dashboard
                .order_client
                .summary()
                .await
                .map_err(|e| Alert::new("summarize orders", &e))?;
            if args.get_flag("json") {
                let json = serde_json::to_string_pretty(&summary)
                    .map_err(|e| Alert::from_message("encode summary", e))?;
                return Ok(Output::Json(json));
            }
            return Ok(Output::Text(summary.to_string()));
        }
        _ => {}
    }
    Ok(Output::View)
}

fn order_id(args: &ArgMatches) -> OrderId {
    OrderId::from(args.get_one::<String>("id").cloned().unwrap_or_default())
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut dashboard = match Dashboard::new(&config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match execute(&mut dashboard, &matches).await {
        Ok(Output::View) => dashboard
            .render()
            .await
            .map(Output::Text)
            .map_err(|e| Alert::new("render orders", &e)),
        other => other,
    };

    if let Err(e) = dashboard.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }

    match outcome {
        Ok(Output::Text(text)) | Ok(Output::Json(text)) => {
            println!("{}", text.trim_end());
            ExitCode::SUCCESS
        }
        Ok(Output::View) => ExitCode::SUCCESS,
        Err(alert) => {
            eprintln!("{alert}");
            ExitCode::FAILURE
        }
    }
}
