use atelier_config::Config;
use atelier_persistence_postgres::MigrationStatus;
use clap::Subcommand;

use crate::database;

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// List all migrations and whether they have been applied
    #[command(aliases(["l", "ls"]))]
    List,
    /// Run pending migrations
    #[command(aliases(["u"]))]
    Up {
        /// Maximum number of migrations to run
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Revert the most recently applied migrations
    #[command(aliases(["d"]))]
    Down {
        /// Number of migrations to revert
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Drop and recreate the database schema, losing all data
    Reset {
        /// Confirm dropping all data
        #[arg(long)]
        force: bool,
    },
}

impl MigrateCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let database = database::connect(&config.database).await?;

        match self {
            Self::List => {
                for MigrationStatus { migration, applied } in database.list_migrations().await? {
                    println!("[{}] {}", if applied { "x" } else { " " }, migration.name);
                }
            }
            Self::Up { count } => {
                let applied = database.run_migrations(count).await?;
                for name in &applied {
                    println!("Applied {name}");
                }
                if applied.is_empty() {
                    println!("No migrations pending");
                }
            }
            Self::Down { count } => {
                let reverted = database.revert_migrations(Some(count)).await?;
                for name in &reverted {
                    println!("Reverted {name}");
                }
                if reverted.is_empty() {
                    println!("No migrations applied");
                }
            }
            Self::Reset { force } => {
                anyhow::ensure!(force, "Refusing to drop the database schema without --force");
                database.reset().await?;
                println!("Database schema has been reset");
            }
        }

        Ok(())
    }
}
