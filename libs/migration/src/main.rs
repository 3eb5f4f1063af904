use migration::Migrator;
use sea_orm_migration::cli;

/// `migration up`, `migration down`, `migration status`, ... against `DATABASE_URL`
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
