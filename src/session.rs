//! Line-oriented interactive session
//!
//! Mirrors the dashboard workflow: pick a record type, fill the form, submit,
//! and view the timeline. State lives until `quit` or end of input.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

use crate::app::{CommandContext, fill_form, list_output, timeline_output, types_output};
use crate::core::{Dashboard, RecordId, RecordType};
use crate::error::AppError;
use crate::utils::{debug_enabled, parse_date_input};

const HELP: &str = "\
Commands:
  new <type>                  open the add form (operation, medication, rehabilitation, document)
  title <text>                set the title
  date <date>                 set the date (YYYY-MM-DD, YYYYMMDD, today, yesterday)
  desc <text>                 set the optional description
  form                        show the form state
  submit                      add the record
  cancel                      close the form
  add <type> <date> <title>   add a record in one step
  timeline | list | types     show records or record types
  help                        show this help
  quit                        end the session";

#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    New(RecordType),
    Title(String),
    Date(NaiveDate),
    Desc(String),
    Form,
    Submit,
    Cancel,
    Add {
        record_type: RecordType,
        date: NaiveDate,
        title: String,
    },
    Timeline,
    List,
    Types,
    Help,
    Quit,
}

enum Parsed {
    Command(SessionCommand),
    Blank,
    Unknown(String),
}

fn parse_line(line: &str, ctx: &CommandContext<'_>) -> Result<Parsed, AppError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Parsed::Blank);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "new" | "open" => SessionCommand::New(rest.parse::<RecordType>()?),
        "title" => SessionCommand::Title(rest.to_string()),
        "date" => SessionCommand::Date(parse_date_input(rest, ctx.timezone)?),
        "desc" | "description" => SessionCommand::Desc(rest.to_string()),
        "form" => SessionCommand::Form,
        "submit" => SessionCommand::Submit,
        "cancel" | "close" => SessionCommand::Cancel,
        "add" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            let record_type: RecordType = parts.next().unwrap_or_default().parse()?;
            let date = parse_date_input(parts.next().unwrap_or_default(), ctx.timezone)?;
            let title = parts.next().unwrap_or_default().trim().to_string();
            SessionCommand::Add {
                record_type,
                date,
                title,
            }
        }
        "timeline" => SessionCommand::Timeline,
        "list" => SessionCommand::List,
        "types" => SessionCommand::Types,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Ok(Parsed::Unknown(other.to_string())),
    };
    Ok(Parsed::Command(command))
}

pub(crate) struct Session<'a> {
    dashboard: Dashboard,
    ctx: &'a CommandContext<'a>,
    interactive: bool,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        dashboard: Dashboard,
        ctx: &'a CommandContext<'a>,
        interactive: bool,
    ) -> Self {
        Session {
            dashboard,
            ctx,
            interactive,
        }
    }

    pub(crate) fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        if self.interactive {
            writeln!(out, "Type `help` for commands.")?;
        }
        self.prompt(out)?;
        for line in input.lines() {
            let line = line?;
            match parse_line(&line, self.ctx) {
                Ok(Parsed::Blank) => {}
                Ok(Parsed::Unknown(word)) => {
                    writeln!(out, "Unknown command: {word} (try `help`)")?;
                }
                Ok(Parsed::Command(SessionCommand::Quit)) => break,
                Ok(Parsed::Command(cmd)) => {
                    if let Err(e) = self.execute(cmd, out)? {
                        writeln!(out, "error: {e}")?;
                    }
                }
                Err(e) => writeln!(out, "error: {e}")?,
            }
            self.prompt(out)?;
        }
        out.flush()
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Outer error is I/O on `out`; inner error is a command failure to report.
    fn execute<W: Write>(
        &mut self,
        cmd: SessionCommand,
        out: &mut W,
    ) -> io::Result<Result<(), AppError>> {
        let locale = self.ctx.locale;
        match cmd {
            SessionCommand::New(record_type) => {
                self.dashboard.open_add_dialog(record_type);
                writeln!(out, "{}", locale.dialog_title(Some(record_type)))?;
            }
            SessionCommand::Title(text) => match self.dashboard.form_mut() {
                Some(form) => form.title = text,
                None => writeln!(out, "No form open. Use `new <type>` first.")?,
            },
            SessionCommand::Date(date) => match self.dashboard.form_mut() {
                Some(form) => form.date = Some(date),
                None => writeln!(out, "No form open. Use `new <type>` first.")?,
            },
            SessionCommand::Desc(text) => match self.dashboard.form_mut() {
                Some(form) => form.description = text,
                None => writeln!(out, "No form open. Use `new <type>` first.")?,
            },
            SessionCommand::Form => self.write_form(out)?,
            SessionCommand::Submit => {
                if !self.dashboard.is_dialog_open() {
                    writeln!(out, "No form open. Use `new <type>` first.")?;
                } else if let Some(id) = self.dashboard.submit_dialog() {
                    self.write_added(out, id)?;
                } else {
                    // Same as a disabled submit button: nothing is added.
                    writeln!(out, "Submit disabled: title and date are required.")?;
                }
            }
            SessionCommand::Cancel => {
                self.dashboard.close_dialog();
                if debug_enabled() {
                    eprintln!("[debug] form closed");
                }
            }
            SessionCommand::Add {
                record_type,
                date,
                title,
            } => {
                self.dashboard.open_add_dialog(record_type);
                if let Some(form) = self.dashboard.form_mut() {
                    fill_form(form, &title, date, None);
                }
                match self.dashboard.submit_dialog() {
                    Some(id) => self.write_added(out, id)?,
                    None => {
                        self.dashboard.close_dialog();
                        return Ok(Err(AppError::IncompleteRecord));
                    }
                }
            }
            SessionCommand::Timeline => {
                return self.write_output(out, timeline_output(self.dashboard.store(), self.ctx));
            }
            SessionCommand::List => {
                return self.write_output(out, list_output(self.dashboard.store(), self.ctx));
            }
            SessionCommand::Types => return self.write_output(out, types_output(self.ctx)),
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(Ok(()))
    }

    fn write_output<W: Write>(
        &self,
        out: &mut W,
        rendered: Result<String, AppError>,
    ) -> io::Result<Result<(), AppError>> {
        match rendered {
            Ok(text) => {
                write!(out, "{text}")?;
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }

    fn write_added<W: Write>(&self, out: &mut W, id: RecordId) -> io::Result<()> {
        match self.dashboard.store().get(id) {
            Some(record) => writeln!(
                out,
                "Added record {id}: {} ({})",
                record.title,
                self.ctx.locale.format_date(record.date)
            ),
            None => writeln!(out, "Added record {id}"),
        }
    }

    fn write_form<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let locale = self.ctx.locale;
        if !self.dashboard.is_dialog_open() {
            return writeln!(out, "No form open.");
        }
        let form = self.dashboard.form();
        writeln!(out, "{}", locale.dialog_title(self.dashboard.selected_type()))?;
        writeln!(out, "  title:       {}", form.title)?;
        match form.date {
            Some(d) => writeln!(out, "  date:        {}", locale.format_date(d))?,
            None => writeln!(out, "  date:        -")?,
        }
        writeln!(out, "  description: {}", form.description)?;
        let state = if form.can_submit() { "ready" } else { "disabled" };
        writeln!(out, "  submit:      {state}")
    }
}
