//! # Shell
//!
//! Line-oriented front end: one line in, one command run, one response out.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► Command::from_str ──► dispatch(session) ──► render       │
//! │      ▲               │ error              │ error             │         │
//! │      │               ▼                    ▼                   ▼         │
//! │      │          render_error         render_error          stdout       │
//! │      └──────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  EOF or "quit" ends the loop                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command completes before the next line is read, so the response to a
//! query always reflects every earlier command.

use std::io::{BufRead, Write};
use std::str::FromStr;

use greenify_core::{CategorySection, Product};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::cart::{CartResponse, CartUpdate};
use crate::commands::checkout::CheckoutResponse;
use crate::commands::{cart, checkout, config, product};
use crate::error::ApiError;
use crate::render;
use crate::state::{ConfigState, OutputFormat, Session};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Show(String),
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
    Cart,
    Checkout,
    Config,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        let extra = words.next().is_some();

        // Arity is checked per command, after the name is known.
        let with_id = |make: fn(String) -> Command| {
            if extra {
                return Err(ApiError::validation(format!(
                    "Too many arguments for '{}'",
                    name
                )));
            }
            arg.map(|id| make(id.to_string()))
                .ok_or_else(|| ApiError::validation(format!("'{}' needs a product id", name)))
        };
        let without_arg = |command: Command| match arg {
            Some(_) => Err(ApiError::validation(format!(
                "'{}' takes no arguments",
                name
            ))),
            None => Ok(command),
        };

        match name.as_str() {
            "products" | "ls" => without_arg(Command::Products),
            "show" => with_id(Command::Show),
            "add" => with_id(Command::Add),
            "inc" | "+" => with_id(Command::Increment),
            "dec" | "-" => with_id(Command::Decrement),
            "rm" | "remove" => with_id(Command::Remove),
            "clear" => without_arg(Command::Clear),
            "cart" => without_arg(Command::Cart),
            "checkout" => without_arg(Command::Checkout),
            "config" => without_arg(Command::Config),
            "help" | "?" => without_arg(Command::Help),
            "quit" | "exit" => without_arg(Command::Quit),
            _ => Err(ApiError::unknown_command(line.trim())),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Products(Vec<CategorySection>),
    Product(Product),
    Cart(CartResponse),
    Update(CartUpdate),
    Checkout(CheckoutResponse),
    Config(ConfigState),
    Help(Vec<HelpEntry>),
    Quit,
}

/// One line of the help table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

pub const HELP: &[HelpEntry] = &[
    HelpEntry { usage: "products", description: "list the catalog by category" },
    HelpEntry { usage: "show <id>", description: "show one product" },
    HelpEntry { usage: "add <id>", description: "put a product in the cart" },
    HelpEntry { usage: "inc <id>", description: "one more of a cart item" },
    HelpEntry { usage: "dec <id>", description: "one less of a cart item" },
    HelpEntry { usage: "rm <id>", description: "remove a cart item" },
    HelpEntry { usage: "clear", description: "empty the cart" },
    HelpEntry { usage: "cart", description: "show the cart and totals" },
    HelpEntry { usage: "checkout", description: "pay (not available yet)" },
    HelpEntry { usage: "config", description: "show the active configuration" },
    HelpEntry { usage: "quit", description: "leave the shop" },
];

/// Runs one command against the session.
pub fn dispatch(session: &mut Session, command: Command) -> Result<Response, ApiError> {
    let response = match command {
        Command::Products => Response::Products(product::list_products(
            &session.catalog,
            &session.cart,
        )),
        Command::Show(id) => Response::Product(product::get_product(&session.catalog, &id)?),
        Command::Add(id) => {
            Response::Update(cart::add_to_cart(&session.catalog, &mut session.cart, &id)?)
        }
        Command::Increment(id) => Response::Update(cart::increment_item(&mut session.cart, &id)),
        Command::Decrement(id) => Response::Update(cart::decrement_item(&mut session.cart, &id)),
        Command::Remove(id) => Response::Update(cart::remove_from_cart(&mut session.cart, &id)),
        Command::Clear => Response::Update(cart::clear_cart(&mut session.cart)),
        Command::Cart => Response::Cart(cart::get_cart(&session.cart)),
        Command::Checkout => Response::Checkout(checkout::checkout(session.id, &session.cart)),
        Command::Config => Response::Config(config::get_config(&session.config)),
        Command::Help => Response::Help(HELP.to_vec()),
        Command::Quit => Response::Quit,
    };
    Ok(response)
}

/// Reads commands from `input` until EOF or `quit`, writing responses to
/// `output`.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    let format = session.config.output;

    if format == OutputFormat::Text {
        writeln!(output, "{}", render::welcome(&session.config))?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let result = line.parse::<Command>().and_then(|command| {
            debug!(?command, "dispatching");
            dispatch(session, command)
        });

        match result {
            Ok(Response::Quit) => break,
            Ok(response) => write_response(&mut output, format, session, &response)?,
            Err(err) => {
                warn!(code = err.code.as_str(), message = %err.message, "command failed");
                write_error(&mut output, format, &err)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

fn write_response<W: Write>(
    output: &mut W,
    format: OutputFormat,
    session: &Session,
    response: &Response,
) -> Result<(), ApiError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, response)?;
            writeln!(output)?;
        }
        OutputFormat::Text => {
            write!(output, "{}", render::response(response, session))?;
        }
    }
    Ok(())
}

fn write_error<W: Write>(
    output: &mut W,
    format: OutputFormat,
    err: &ApiError,
) -> Result<(), ApiError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, err)?;
            writeln!(output)?;
        }
        OutputFormat::Text => writeln!(output, "error {}", err)?,
    }
    Ok(())
}
