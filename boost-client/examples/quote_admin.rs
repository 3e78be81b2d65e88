// boost-client/examples/quote_admin.rs
// 报价管理示例: 列出报价, 可选创建一条
//
// 用法: cargo run --example quote_admin --features logger [name] [YYYY-MM-DD] [employer_id]

use anyhow::Context;
use boost_client::logger::init_logger;
use boost_client::{
    CalendarDate, ClientConfig, Employer, EntityService, Quote, QuoteService, RequestOptions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = ClientConfig::from_env();
    let client = config.build_http_client()?;
    let quotes: QuoteService<_> = EntityService::new(client, &config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [name, date, employer_id] = args.as_slice() {
        let employer_id = employer_id.parse().context("employer_id must be a number")?;
        let quote_date = CalendarDate::parse(date);
        if !quote_date.is_valid() {
            anyhow::bail!("invalid date {:?}, expected YYYY-MM-DD", date);
        }

        let created = quotes
            .create(&Quote::new(name.as_str(), quote_date, Employer::reference(employer_id)))
            .await?;
        if let Some(alert) = created.alert() {
            tracing::info!("{} ({})", alert.key, alert.param.unwrap_or_default());
        }
    }

    let page = quotes
        .query(Some(&RequestOptions::new().paginate(0, 20).sort_by("id,asc")))
        .await?;
    for quote in page.body.unwrap_or_default() {
        let date = quote
            .quote_date
            .as_ref()
            .and_then(CalendarDate::as_naive)
            .map(|d| d.to_string())
            .unwrap_or_default();
        let employer = quote
            .employer
            .and_then(|e| e.id)
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:>6}  {:<24}  {:<10}  employer {}",
            quote.id.map(|id| id.to_string()).unwrap_or_default(),
            quote.name.unwrap_or_default(),
            date,
            employer,
        );
    }

    Ok(())
}
