use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use validator::Validate;

use devconnect_cli::seeder::{self, SeedConfig};
use devconnect_config::DatabaseConfig;
use devconnect_core::{gravatar_url, hash_password};
use devconnect_db::{PgStore, Store, StoreError, UserStore, init_store};
use devconnect_models::{NewUser, RegisterUserDto, normalize_email};

#[derive(Parser)]
#[command(name = "devconnect-cli")]
#[command(about = "DevConnect CLI - Administrative tools for DevConnect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a user account
    CreateUser {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users, profiles, posts, likes and comments
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Share of users that get a profile (0.0 - 1.0)
        #[arg(long, default_value = "0.8")]
        profile_ratio: f64,

        /// Number of posts per user
        #[arg(long, default_value = "2")]
        posts: usize,

        /// Upper bound on likes per post
        #[arg(long, default_value = "5")]
        likes: usize,

        /// Number of comments per post
        #[arg(long, default_value = "2")]
        comments: usize,

        /// Password for every seeded account
        #[arg(long, default_value = "password123")]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;

    match command {
        Commands::Migrate => handle_migrate(&config).await,
        Commands::CreateUser {
            name,
            email,
            password,
        } => {
            let store = init_store(&config).await?;
            handle_create_user(store.as_ref(), name, email, password).await
        }
        Commands::Seed {
            users,
            profile_ratio,
            posts,
            likes,
            comments,
            password,
        } => {
            let store = init_store(&config).await?;
            let seed_config = SeedConfig::new(users)
                .with_profile_ratio(profile_ratio)
                .with_posts_per_user(posts)
                .with_interactions(likes, comments);
            handle_seed(store.as_ref(), seed_config, &password).await
        }
    }
}

async fn handle_migrate(config: &DatabaseConfig) -> anyhow::Result<()> {
    if config.is_memory() {
        bail!("Nothing to migrate for an in-memory store");
    }

    let store = PgStore::connect(config).await?;
    store.migrate().await?;

    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_user(
    store: &dyn Store,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let dto = RegisterUserDto {
        name: name.trim().to_string(),
        email: normalize_email(&email),
        password,
    };
    if let Err(errors) = dto.validate() {
        bail!("Invalid user: {errors}");
    }

    let password_hash = hash_password(&dto.password).map_err(|e| e.error)?;
    let new_user = NewUser {
        name: dto.name,
        avatar: gravatar_url(&dto.email),
        email: dto.email,
        password_hash,
    };

    match store.insert_user(new_user).await {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   Id: {}", user.id);
            println!("   Email: {}", user.email);
            println!("   Name: {}", user.name);
            Ok(())
        }
        Err(StoreError::Duplicate) => bail!("User with this email already exists"),
        Err(e) => Err(e.into()),
    }
}

async fn handle_seed(store: &dyn Store, config: SeedConfig, password: &str) -> anyhow::Result<()> {
    let password_hash = hash_password(password).map_err(|e| e.error)?;
    let summary = seeder::seed_all(store, config, &password_hash).await?;

    println!("   Users: {} ({} skipped)", summary.users, summary.skipped_users);
    println!("   Profiles: {}", summary.profiles);
    println!("   Posts: {}", summary.posts);
    println!("   Likes: {}", summary.likes);
    println!("   Comments: {}", summary.comments);
    Ok(())
}
