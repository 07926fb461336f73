//! Interactive catalog session on stdin.
//!
//! Plain lines are the search box contents; lines starting with `:` are
//! commands. Fetch results are printed as they settle, so a slow response
//! never blocks typing.

use anyhow::Result;
use catalog_lib::search::SEARCH_HINT;
use catalog_lib::{CatalogConfig, CatalogSession, Client, Pagination, SearchSignal, SessionUpdate};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::probe_list_images;
use super::show::show_product;
use crate::output::{print_list, OutputFormat};

const HELP: &str = "Type to search (3+ characters, empty line clears). \
Commands: :n next, :p previous, :g N go to page, :first, :last, :open ID, :help, :q quit";

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Next,
    Previous,
    GoTo(u32),
    First,
    Last,
    Open(String),
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> BrowseCommand {
    let Some(command) = line.trim().strip_prefix(':') else {
        return BrowseCommand::Search(line.to_string());
    };
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    match (name, arg) {
        ("n" | "next", None) => BrowseCommand::Next,
        ("p" | "prev", None) => BrowseCommand::Previous,
        ("g" | "go", Some(n)) => match n.parse() {
            Ok(page) => BrowseCommand::GoTo(page),
            Err(_) => BrowseCommand::Unknown(line.trim().to_string()),
        },
        ("first", None) => BrowseCommand::First,
        ("last", None) => BrowseCommand::Last,
        ("open" | "o", Some(id)) => BrowseCommand::Open(id.to_string()),
        ("help" | "h" | "?", None) => BrowseCommand::Help,
        ("q" | "quit", None) => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(line.trim().to_string()),
    }
}

fn page_target(pagination: &Pagination, command: &BrowseCommand) -> Option<u32> {
    match command {
        BrowseCommand::Next => pagination.next(),
        BrowseCommand::Previous => pagination.previous(),
        BrowseCommand::GoTo(page) => pagination.go_to(*page),
        BrowseCommand::First => pagination.first(),
        BrowseCommand::Last => pagination.last(),
        _ => None,
    }
}

pub async fn run(
    client: &Client,
    config: &CatalogConfig,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let mut session = CatalogSession::new(client.clone(), config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("{}", HELP);
    session.start();
    print_list(session.list().state(), format)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    BrowseCommand::Quit => return Ok(()),
                    BrowseCommand::Help => eprintln!("{}", HELP),
                    BrowseCommand::Unknown(text) => eprintln!("Unknown command {:?}. {}", text, HELP),
                    BrowseCommand::Search(text) => {
                        if session.input(&text) == SearchSignal::Hint {
                            eprintln!("{}", SEARCH_HINT);
                        }
                    }
                    BrowseCommand::Open(id) => {
                        open_product(client, &id, format, probe).await;
                    }
                    command => {
                        let target = session
                            .list()
                            .pagination()
                            .and_then(|pagination| page_target(pagination, &command));
                        match target {
                            Some(page) => {
                                session.select_page(page);
                            }
                            None => eprintln!("No such page from here."),
                        }
                    }
                }
            }
            update = session.next_event() => {
                if update == SessionUpdate::ListChanged {
                    render(&mut session, client, format, probe).await?;
                }
            }
        }
    }

    // Piped input ended: let outstanding work land before exiting.
    if session.list().is_loading() || session.search().is_pending() {
        session.settle().await;
        render(&mut session, client, format, probe).await?;
    }
    Ok(())
}

/// Shows a product without ending the session; a rejected id is reported
/// and the loop carries on. Returns true if the detail view was rendered.
async fn open_product(client: &Client, id: &str, format: &OutputFormat, probe: bool) -> bool {
    match show_product(client, id, format, probe).await {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Cannot open {:?}: {}", id, e);
            false
        }
    }
}

async fn render(
    session: &mut CatalogSession,
    client: &Client,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    if probe && !session.list().is_loading() {
        probe_list_images(client, session.list_mut()).await;
    }
    print_list(session.list().state(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_search_input() {
        assert_eq!(parse_line("lamp"), BrowseCommand::Search("lamp".to_string()));
        assert_eq!(parse_line(""), BrowseCommand::Search(String::new()));
        assert_eq!(parse_line("  red shoes "), BrowseCommand::Search("  red shoes ".to_string()));
    }

    #[test]
    fn paging_commands() {
        assert_eq!(parse_line(":n"), BrowseCommand::Next);
        assert_eq!(parse_line(":prev"), BrowseCommand::Previous);
        assert_eq!(parse_line(":g 3"), BrowseCommand::GoTo(3));
        assert_eq!(parse_line(" :first "), BrowseCommand::First);
        assert_eq!(parse_line(":last"), BrowseCommand::Last);
    }

    #[test]
    fn open_and_quit() {
        assert_eq!(parse_line(":open p-001"), BrowseCommand::Open("p-001".to_string()));
        assert_eq!(parse_line(":q"), BrowseCommand::Quit);
        assert_eq!(parse_line(":?"), BrowseCommand::Help);
    }

    #[test]
    fn malformed_commands_are_unknown() {
        assert_eq!(parse_line(":g two"), BrowseCommand::Unknown(":g two".to_string()));
        assert_eq!(parse_line(":open"), BrowseCommand::Unknown(":open".to_string()));
        assert_eq!(parse_line(":n 2"), BrowseCommand::Unknown(":n 2".to_string()));
    }

    #[tokio::test]
    async fn rejected_open_id_is_reported_not_fatal() {
        let client = Client::with_base_url("http://127.0.0.1:9");
        let oversized = "x".repeat(101);
        let command = parse_line(&format!(":open {}", oversized));
        assert_eq!(command, BrowseCommand::Open(oversized.clone()));

        assert!(!open_product(&client, &oversized, &OutputFormat::Json, false).await);
        assert!(!open_product(&client, "\u{0007}", &OutputFormat::Json, false).await);
    }

    #[test]
    fn page_targets_follow_pagination() {
        let pagination = Pagination::new(3, 2);
        assert_eq!(page_target(&pagination, &BrowseCommand::Next), Some(3));
        assert_eq!(page_target(&pagination, &BrowseCommand::Previous), Some(1));
        assert_eq!(page_target(&pagination, &BrowseCommand::Last), Some(3));
        assert_eq!(page_target(&pagination, &BrowseCommand::First), Some(1));
        assert_eq!(page_target(&pagination, &BrowseCommand::GoTo(2)), None);
        assert_eq!(page_target(&pagination, &BrowseCommand::GoTo(9)), None);
    }

    #[test]
    fn last_page_cannot_advance() {
        let pagination = Pagination::new(3, 3);
        assert_eq!(page_target(&pagination, &BrowseCommand::Next), None);
        assert_eq!(page_target(&pagination, &BrowseCommand::Last), None);
    }
}
