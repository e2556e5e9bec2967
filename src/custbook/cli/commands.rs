use super::logging;
use super::print::{print_customers, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use custbook::api::{CmdResult, CustbookApi};
use custbook::config::{self, CustbookConfig};
use custbook::error::Result;
use custbook::model::{CustomerUpdate, NewCustomer};
use custbook::store::fs::FileStore;

struct AppContext {
    api: CustbookApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add {
            name,
            phone,
            email,
            notes,
        }) => handle_add(
            &mut ctx,
            NewCustomer {
                name,
                phone,
                email,
                notes,
            },
        ),
        Some(Commands::Edit {
            id,
            name,
            phone,
            email,
            notes,
        }) => handle_edit(
            &mut ctx,
            id,
            CustomerUpdate {
                name,
                phone,
                email,
                notes,
            },
        ),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let config = match config::config_dir().and_then(CustbookConfig::load) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default configuration");
            CustbookConfig::default()
        }
    };

    let data_file = config.resolve_data_file(cli.file.clone());
    tracing::debug!(path = %data_file.display(), "using data file");

    AppContext {
        api: CustbookApi::new(FileStore::new(data_file)),
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_customers()?;
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: NewCustomer) -> Result<()> {
    let result = ctx.api.add_customer(fields)?;
    print_result(&result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u64, update: CustomerUpdate) -> Result<()> {
    let result = ctx.api.edit_customer(id, &update)?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_customer(id)?;
    print_result(&result);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    print_customers(&result.listed_customers);
}
