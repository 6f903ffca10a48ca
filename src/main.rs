use anyhow::Context;
use clap::Parser;
use f1_dashboard::adapters::queries::SeasonQuery;
use f1_dashboard::app::render;
use f1_dashboard::core::{ResultStore, Storage};
use f1_dashboard::utils::error::ErrorSeverity;
use f1_dashboard::utils::{logger, validation::Validate};
use f1_dashboard::{
    CliConfig, Dashboard, DashboardConfig, DashboardError, EntityKind, LocalStorage, MemoryStore,
    PostgresStore, RankingView, ReportWriter, Season,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🏎️ Starting f1-dashboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => DashboardConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - printing queries only");
        for query in SeasonQuery::all() {
            println!("-- {:?} / {}\n{};\n", query.source, query.kind, query.sql());
        }
        return Ok(());
    }

    let season = config.default_season();
    let kind = match config.default_entity() {
        Ok(kind) => kind,
        Err(e) => exit_with(e),
    };

    let outcome = match cli.fixtures() {
        Some(paths) => run_with_fixtures(paths, &cli, &config, season, kind).await,
        None => run_with_database(&cli, &config, season, kind).await,
    };

    match outcome {
        Ok(()) => {
            tracing::info!("✅ Done");
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

async fn run_with_fixtures(
    (standings_path, results_path): (&str, &str),
    cli: &CliConfig,
    config: &DashboardConfig,
    season: Season,
    kind: EntityKind,
) -> Result<(), DashboardError> {
    tracing::info!("📄 Using fixtures {} and {}", standings_path, results_path);
    let storage = LocalStorage::new(".".to_string());
    let standings = storage.read_file(standings_path).await?;
    let results = storage.read_file(results_path).await?;
    let store = MemoryStore::from_fixtures(kind, &standings, &results)?;
    show(&Dashboard::new(store), cli, config, season, kind).await
}

async fn run_with_database(
    cli: &CliConfig,
    config: &DashboardConfig,
    season: Season,
    kind: EntityKind,
) -> Result<(), DashboardError> {
    let database = config.database()?;
    database.validate()?;

    let store = PostgresStore::connect(&database).await?;
    let dashboard = Dashboard::new(store);
    let outcome = show(&dashboard, cli, config, season, kind).await;
    dashboard.store().close().await;
    outcome
}

async fn show<S: ResultStore>(
    dashboard: &Dashboard<S>,
    cli: &CliConfig,
    config: &DashboardConfig,
    season: Season,
    kind: EntityKind,
) -> Result<(), DashboardError> {
    let report = dashboard.season_report(season, kind).await?;

    println!("{}", render::standings_table(season, kind, &report.standings));

    let view = RankingView::new(&report.evolution);
    let selection: Vec<String> = if cli.select.is_empty() {
        view.selection_of_size(config.selection_size())
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        cli.select.clone()
    };
    println!("{}", render::evolution_summary(&view, &selection, cli.highlight_round));

    println!("{}", render::performance_table(kind, &report.performance));

    if cli.no_export {
        return Ok(());
    }

    let storage = LocalStorage::new(config.output.output_path.clone());
    let writer = ReportWriter::new(storage, config.clone());
    let output_path = writer.write(&report).await?;
    println!("📁 Report saved to: {}", output_path);
    Ok(())
}

fn exit_with(e: DashboardError) -> ! {
    tracing::error!(
        "❌ f1-dashboard failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
