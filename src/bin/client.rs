use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

/// Order desk client
#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(about = "client cli used by shop staff to place and inspect orders", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_SERVER, help = "Base url of the order desk server")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// place a new order
    #[command(arg_required_else_help = true)]
    Place(PlaceArgs),
    /// list every order
    List,
    /// show a single order
    #[command(arg_required_else_help = true)]
    Get {
        #[arg(help = "Id of the order, e.g. ORD1760606400123042")]
        order_id: String,
    },
}

#[derive(Debug, Args)]
struct PlaceArgs {
    #[arg(long, help = "Customer, as json or plain text.", value_name = "CUSTOMER")]
    customer: String,
    #[arg(long, help = "Ordered items as a json array.", value_name = "ITEMS_JSON")]
    items: String,
    #[arg(long, help = "Order total.")]
    total: f64,
    #[arg(long, help = "Payment method, e.g. card.")]
    payment_method: String,
}

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderResponse {
    order_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// json if it parses, otherwise the raw text
fn json_or_text(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let client = Client::new();
    let base = args.server.trim_end_matches('/');

    match args.command {
        Commands::Place(order) => {
            println!("placing order for customer={}", order.customer);
            let res = client
                .post(format!("{}/api/placeOrder", base))
                .json(&serde_json::json!({
                    "customer": json_or_text(&order.customer),
                    "items": json_or_text(&order.items),
                    "total": order.total,
                    "paymentMethod": order.payment_method,
                }))
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<PlaceOrderResponse>().await?;
                    println!("order placed successfully, order id = {}", res.order_id);
                }
                StatusCode::BAD_REQUEST => {
                    let res = res.json::<ErrorResponse>().await?;
                    println!("order rejected, {}", res.error);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
        Commands::List => {
            let res = client.get(format!("{}/api/orders", base)).send().await?;
            match res.status() {
                StatusCode::OK => {
                    let orders = res.json::<Vec<Value>>().await?;
                    println!("{} order(s)", orders.len());
                    for order in orders {
                        println!(
                            "{}\t{}\ttotal={}\tpayment={}",
                            order["orderId"], order["timestamp"], order["total"], order["paymentMethod"]
                        );
                    }
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
        Commands::Get { order_id } => {
            let res = client
                .get(format!("{}/api/orders/{}", base, order_id))
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let order = res.json::<Value>().await?;
                    println!("{}", serde_json::to_string_pretty(&order)?);
                }
                StatusCode::NOT_FOUND => {
                    println!("order {} not found", order_id);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
    };
    Ok(())
}
