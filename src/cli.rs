// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use crate::core::error::ApiError;
use crate::layout::render_chrome;
use crate::pages;
use crate::router::{navigate, Route};
use crate::types::models::ProfileUpdate;
use crate::App;

#[derive(Parser)]
#[command(name = "jobassist")]
#[command(about = "Job search assistant client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login { email: String, password: String },
    /// Create an account
    Register {
        email: String,
        password: String,
        #[arg(long)]
        full_name: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user as the backend sees it
    Whoami,
    /// Navigate to a path and render the resolved page
    Open { path: String },
    /// Upload a resume file (pdf, docx or txt)
    UploadResume { file: PathBuf },
    /// Update profile and job-search preferences
    Profile {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        telegram: Option<String>,
        #[arg(long)]
        search_enabled: Option<bool>,
        #[arg(long)]
        keywords: Option<String>,
        #[arg(long)]
        locations: Option<String>,
        #[arg(long)]
        salary_min: Option<String>,
        #[arg(long)]
        salary_max: Option<String>,
    },
    /// Password management
    #[command(subcommand)]
    Password(PasswordCommand),
}

#[derive(Subcommand)]
pub enum PasswordCommand {
    /// Change the password of the signed-in user
    Change { current: String, new: String },
    /// Request a password reset email
    ResetRequest { email: String },
    /// Reset the password with an emailed token
    Reset { token: String, new_password: String },
}

pub async fn handle_command(cli: Cli, app: &App) -> Result<()> {
    match cli.command {
        Command::Login { email, password } => match app.auth.login(&email, &password).await {
            Ok(response) => {
                let name = response.user.full_name.clone();
                app.session
                    .establish(response.access_token, response.user)
                    .await?;
                println!("✓ Signed in as {}", name);
                // Mirror the post-login redirect: land on the dashboard.
                open(app, "/").await;
            }
            Err(ApiError::Unauthorized) => {
                println!("❌ Invalid email or password");
            }
            Err(e) => {
                error!("Login failed: {}", e);
                println!("❌ Login failed: {}", e);
            }
        },

        Command::Register {
            email,
            password,
            full_name,
        } => {
            let request = crate::auth::RegisterRequest {
                email,
                password,
                full_name,
            };
            match app.auth.register(&request).await {
                Ok(profile) => {
                    println!("✓ Account created for {}", profile.email);
                    println!("  Sign in with: jobassist login {} <password>", profile.email);
                }
                Err(e) => {
                    error!("Registration failed: {}", e);
                    println!("❌ Registration failed: {}", e);
                }
            }
        }

        Command::Logout => {
            app.session.clear().await?;
            println!("✓ Signed out");
        }

        Command::Whoami => {
            if !app.session.is_authenticated() {
                println!("Not signed in");
                return Ok(());
            }
            match app.auth.current_user().await {
                Ok(user) => println!("{} <{}>", user.full_name, user.email),
                Err(ApiError::Unauthorized) => {
                    println!("Session expired. Sign in again with: jobassist login");
                }
                Err(e) => println!("❌ {}", e),
            }
        }

        Command::Open { path } => {
            open(app, &path).await;
        }

        Command::UploadResume { file } => {
            match pages::resume::upload(&app.client, &app.cache, &file).await {
                Ok(response) => {
                    println!("✓ Resume uploaded: {}", response.resume.title);
                }
                Err(e) => {
                    error!("Resume upload failed: {}", e);
                    println!("❌ Resume upload failed: {}", e);
                }
            }
        }

        Command::Profile {
            full_name,
            phone,
            telegram,
            search_enabled,
            keywords,
            locations,
            salary_min,
            salary_max,
        } => {
            let update = ProfileUpdate {
                full_name,
                phone_number: phone,
                telegram_chat_id: telegram,
                job_search_enabled: search_enabled,
                search_keywords: keywords,
                preferred_locations: locations,
                salary_min,
                salary_max,
            };
            if update.is_empty() {
                println!("Nothing to update. Pass at least one --flag.");
                return Ok(());
            }
            match pages::settings::update(&app.auth, &app.cache, &update).await {
                Ok(profile) => {
                    println!("✓ Profile updated");
                    println!("{}", pages::settings::render(&profile));
                }
                Err(e) => println!("❌ Profile update failed: {}", e),
            }
        }

        Command::Password(command) => handle_password_command(command, app).await?,
    }

    Ok(())
}

async fn handle_password_command(command: PasswordCommand, app: &App) -> Result<()> {
    match command {
        PasswordCommand::Change { current, new } => {
            match app.auth.change_password(&current, &new).await {
                Ok(status) => println!("✓ {}", status.message.unwrap_or(status.status)),
                Err(e) => println!("❌ Password change failed: {}", e),
            }
        }
        PasswordCommand::ResetRequest { email } => {
            match app.auth.request_password_reset(&email).await {
                Ok(status) => println!("✓ {}", status.message.unwrap_or(status.status)),
                Err(e) => println!("❌ Reset request failed: {}", e),
            }
        }
        PasswordCommand::Reset {
            token,
            new_password,
        } => match app.auth.reset_password(&token, &new_password).await {
            Ok(status) => println!("✓ {}", status.message.unwrap_or(status.status)),
            Err(e) => println!("❌ Password reset failed: {}", e),
        },
    }
    Ok(())
}

/// Navigate to `path` and render whatever route the guard resolves to.
async fn open(app: &App, path: &str) {
    let route = navigate(path, app.session.is_authenticated());
    tracing::debug!("Rendering {}", route.path());

    if !route.is_public() {
        let user = app.session.user();
        print!("{}", render_chrome(user.as_ref(), route));
    }

    match route {
        Route::Login => {
            println!("Not signed in. Use: jobassist login <email> <password>");
        }
        Route::Register => {
            println!("Create an account with: jobassist register <email> <password> --full-name <name>");
        }
        Route::Dashboard => match pages::dashboard::load(&app.client, &app.cache).await {
            Ok(data) => print!("{}", pages::dashboard::render(&data)),
            Err(e) => print!("{}", pages::render_error("Failed to load dashboard", &e)),
        },
        Route::Resume => match pages::resume::load(&app.client, &app.cache).await {
            Ok(resume) => print!("{}", pages::resume::render(&resume)),
            Err(e) => print!("{}", pages::render_error("Failed to load resume", &e)),
        },
        Route::Jobs => match pages::jobs::load(&app.client, &app.cache).await {
            Ok(jobs) => print!("{}", pages::jobs::render(&jobs)),
            Err(e) => print!("{}", pages::render_error("Failed to load jobs", &e)),
        },
        Route::Applications => match pages::applications::load(&app.client, &app.cache).await {
            Ok(apps) => print!("{}", pages::applications::render(&apps)),
            Err(e) => print!("{}", pages::render_error("Failed to load applications", &e)),
        },
        Route::HrContacts => match pages::hr_contacts::load(&app.client, &app.cache).await {
            Ok(contacts) => print!("{}", pages::hr_contacts::render(&contacts)),
            Err(e) => print!("{}", pages::render_error("Failed to load HR contacts", &e)),
        },
        Route::Settings => match pages::settings::load(&app.client, &app.cache).await {
            Ok(profile) => print!("{}", pages::settings::render(&profile)),
            Err(e) => print!("{}", pages::render_error("Failed to load settings", &e)),
        },
    }
}
