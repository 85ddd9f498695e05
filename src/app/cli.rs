use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal,
};

use crate::app::table::TableView;
use crate::error::MonitorError;
use crate::manager::monitor::JobMonitor;
use crate::models::column::{Column, SortOrder};
use crate::models::job::{Job, JobState};

const HELP: &[&str] = &[
    "job <id> <state> <path> <client> [server|-] [real] [user] [faults] [in] [out]",
    "list [column] [asc|desc]",
    "clear",
    "expire [seconds]",
    "parts [n]",
    "show <column> | hide <column>",
    "help | exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Job(Job),
    List { column: Column, order: SortOrder },
    Clear,
    Expire(Option<i64>),
    Parts(Option<i32>),
    Show(Column),
    Hide(Column),
    Help,
    Exit,
}

/// Parses one shell line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, MonitorError> {
    let mut args = line.split_whitespace();
    let command = match args.next() {
        Some(command) => command,
        None => return Ok(None),
    };

    let command = match command {
        "job" => Command::Job(parse_job(&mut args)?),
        "list" => {
            let column = args.next().map(str::parse::<Column>).transpose()?.unwrap_or(Column::Id);
            let order = args.next().map(str::parse::<SortOrder>).transpose()?.unwrap_or_default();
            Command::List { column, order }
        }
        "clear" => Command::Clear,
        "expire" => Command::Expire(args.next().map(parse_number).transpose()?),
        "parts" => Command::Parts(args.next().map(parse_number).transpose()?),
        "show" => Command::Show(args.next().ok_or(MonitorError::MissingArgument("column"))?.parse::<Column>()?),
        "hide" => Command::Hide(args.next().ok_or(MonitorError::MissingArgument("column"))?.parse::<Column>()?),
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => return Err(MonitorError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_job<'a, I: Iterator<Item = &'a str>>(args: &mut I) -> Result<Job, MonitorError> {
    let id = parse_number(args.next().ok_or(MonitorError::MissingArgument("job id"))?)?;
    let state: JobState = args.next().ok_or(MonitorError::MissingArgument("job state"))?.parse()?;
    let path = args.next().ok_or(MonitorError::MissingArgument("file path"))?;
    let client = parse_number(args.next().ok_or(MonitorError::MissingArgument("client host id"))?)?;

    let mut job = Job::new(id, state, path, client);
    job.server_host_id = match args.next() {
        None | Some("-") => None,
        Some(server) => Some(parse_number(server)?),
    };
    job.real_msec = args.next().map(parse_number).transpose()?.unwrap_or(0);
    job.user_msec = args.next().map(parse_number).transpose()?.unwrap_or(0);
    job.page_faults = args.next().map(parse_number).transpose()?.unwrap_or(0);
    job.in_uncompressed = args.next().map(parse_number).transpose()?.unwrap_or(0);
    job.out_uncompressed = args.next().map(parse_number).transpose()?.unwrap_or(0);
    Ok(job)
}

fn parse_number<N: std::str::FromStr>(text: &str) -> Result<N, MonitorError> {
    text.parse().map_err(|_| MonitorError::InvalidNumber(text.to_string()))
}

pub fn run_cli(monitor: &JobMonitor, table: &mut TableView) -> Result<(), MonitorError> {
    println!("Job monitor started. Enter a command, 'help' for a list, or 'exit' to quit.");

    terminal::enable_raw_mode()?;
    let result = command_loop(monitor, table);
    terminal::disable_raw_mode()?;
    result
}

fn command_loop(monitor: &JobMonitor, table: &mut TableView) -> Result<(), MonitorError> {
    let mut commands_history: Vec<String> = Vec::new();

    loop {
        let input = read_line(&mut commands_history)?;

        let command = match parse_command(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("\r{}", e);
                continue;
            }
        };

        match command {
            Command::Job(job) => {
                let id = job.id;
                monitor.update(job)?;
                println!("\rUpdated job {}", id);
            }
            Command::List { column, order } => {
                let snapshot = monitor.snapshot(column, order)?;
                if snapshot.rows.is_empty() {
                    println!("\rNo jobs");
                } else {
                    for line in table.render(&snapshot.rows) {
                        println!("\r{}", line);
                    }
                }
                if snapshot.pending_expiry > 0 {
                    println!("\r{} finished job(s) waiting to expire", snapshot.pending_expiry);
                }
            }
            Command::Clear => {
                monitor.clear()?;
                println!("\rJob list cleared");
            }
            Command::Expire(Some(seconds)) => {
                monitor.set_expire_duration(seconds)?;
                println!("\rExpire duration set to {}", seconds);
            }
            Command::Expire(None) => {
                let snapshot = monitor.snapshot(Column::Id, SortOrder::default())?;
                println!("\rExpire duration: {}", snapshot.expire_duration);
            }
            Command::Parts(Some(parts)) => {
                monitor.set_number_of_file_path_parts(parts)?;
                println!("\rShowing {} file path parts", parts);
            }
            Command::Parts(None) => {
                let snapshot = monitor.snapshot(Column::Id, SortOrder::default())?;
                println!("\rFile path parts: {}", snapshot.file_path_parts);
            }
            Command::Show(column) => table.set_column_visible(column, true),
            Command::Hide(column) => table.set_column_visible(column, false),
            Command::Help => {
                for line in HELP {
                    println!("\r  {}", line);
                }
            }
            Command::Exit => {
                println!("\rExiting the program...");
                return Ok(());
            }
        }
    }
}

/// Reads one line in raw mode, with Up/Down walking the command history.
fn read_line(commands_history: &mut Vec<String>) -> Result<String, MonitorError> {
    let mut history_index = commands_history.len();
    let mut input = String::new();

    print!("\r>>> ");
    io::stdout().flush()?;

    loop {
        let key_event = match event::read()? {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => key_event,
            _ => continue,
        };

        match key_event.code {
            KeyCode::Enter => {
                println!();
                break;
            }
            KeyCode::Up => {
                if history_index > 0 {
                    history_index -= 1;
                }
                if let Some(command) = commands_history.get(history_index) {
                    input = command.clone();
                    redraw(&input)?;
                }
            }
            KeyCode::Down => {
                if history_index < commands_history.len() {
                    history_index += 1;
                }
                input = commands_history.get(history_index).cloned().unwrap_or_default();
                redraw(&input)?;
            }
            KeyCode::Char(c) => {
                input.push(c);
                print!("{}", c);
                io::stdout().flush()?;
            }
            KeyCode::Backspace => {
                input.pop();
                redraw(&input)?;
            }
            KeyCode::Esc => {
                input.clear();
                redraw(&input)?;
            }
            _ => {}
        }
    }

    if !input.trim().is_empty() {
        commands_history.push(input.clone());
    }
    Ok(input)
}

fn redraw(input: &str) -> io::Result<()> {
    execute!(
        io::stdout(),
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )?;
    print!(">>> {}", input);
    io::stdout().flush()
}
