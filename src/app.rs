use std::io::{self, IsTerminal};

use crate::cli::{AddArgs, Cli};
use crate::core::{CaptureForm, Dashboard, RecordStore, RecordType, Timeline};
use crate::error::AppError;
use crate::output::{
    Locale, TableOptions, output_list_csv, output_list_json, output_timeline_csv,
    output_timeline_json, output_types_csv, output_types_json, render_list, render_timeline,
    render_types,
};
use crate::session::Session;
use crate::utils::{Timezone, debug_enabled, filter_json, parse_date_input};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) locale: Locale,
    pub(crate) timezone: Timezone,
    pub(crate) jq_filter: Option<&'a str>,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            use_color: self.cli.use_color(),
            compact: self.cli.compact,
            locale: self.locale,
        }
    }

    fn finish_json(&self, json: String) -> Result<String, AppError> {
        match self.jq_filter {
            Some(filter) => Ok(filter_json(&json, filter)?),
            None => Ok(json + "\n"),
        }
    }
}

/// Render the grouped timeline in the selected output format
pub(crate) fn timeline_output(
    store: &RecordStore,
    ctx: &CommandContext<'_>,
) -> Result<String, AppError> {
    let timeline = Timeline::build(store.list());
    if debug_enabled() {
        eprintln!(
            "[debug] {} record(s) in {} bucket(s)",
            timeline.total(),
            timeline.buckets().len()
        );
    }
    if ctx.cli.json || ctx.jq_filter.is_some() {
        ctx.finish_json(output_timeline_json(&timeline, ctx.locale))
    } else if ctx.cli.csv {
        Ok(output_timeline_csv(&timeline))
    } else {
        Ok(render_timeline(&timeline, ctx.table_options()))
    }
}

pub(crate) fn list_output(
    store: &RecordStore,
    ctx: &CommandContext<'_>,
) -> Result<String, AppError> {
    if debug_enabled() {
        eprintln!("[debug] listing {} record(s)", store.len());
    }
    if ctx.cli.json || ctx.jq_filter.is_some() {
        ctx.finish_json(output_list_json(store.list()))
    } else if ctx.cli.csv {
        Ok(output_list_csv(store.list()))
    } else {
        Ok(render_list(store, ctx.table_options()))
    }
}

pub(crate) fn types_output(ctx: &CommandContext<'_>) -> Result<String, AppError> {
    if ctx.cli.json || ctx.jq_filter.is_some() {
        ctx.finish_json(output_types_json(ctx.locale))
    } else if ctx.cli.csv {
        Ok(output_types_csv(ctx.locale))
    } else {
        Ok(render_types(ctx.table_options()))
    }
}

fn initial_store(ctx: &CommandContext<'_>) -> RecordStore {
    if ctx.cli.no_seed {
        RecordStore::new()
    } else {
        RecordStore::seeded()
    }
}

/// Fill a capture form from the `add` arguments and submit it once
fn handle_add(args: &AddArgs, ctx: &CommandContext<'_>) -> Result<String, AppError> {
    let record_type: RecordType = args.record_type.parse()?;
    let date = parse_date_input(&args.date, ctx.timezone)?;

    let mut dashboard = Dashboard::new(initial_store(ctx));
    dashboard.open_add_dialog(record_type);
    if let Some(form) = dashboard.form_mut() {
        fill_form(form, &args.title, date, args.description.as_deref());
    }
    if dashboard.submit_dialog().is_none() {
        return Err(AppError::IncompleteRecord);
    }
    timeline_output(dashboard.store(), ctx)
}

pub(crate) fn fill_form(
    form: &mut CaptureForm,
    title: &str,
    date: chrono::NaiveDate,
    description: Option<&str>,
) {
    form.title = title.to_string();
    form.date = Some(date);
    form.description = description.unwrap_or_default().to_string();
}

/// Run the selected command and print its output
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    use crate::cli::Commands;

    let output = match &ctx.cli.command {
        Some(Commands::Timeline) | None => timeline_output(&initial_store(ctx), ctx)?,
        Some(Commands::List) => list_output(&initial_store(ctx), ctx)?,
        Some(Commands::Types) => types_output(ctx)?,
        Some(Commands::Add(args)) => handle_add(args, ctx)?,
        Some(Commands::Session) => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let dashboard = Dashboard::new(initial_store(ctx));
            let mut session = Session::new(dashboard, ctx, interactive);
            if let Err(e) = session.run(stdin.lock(), &mut io::stdout().lock()) {
                eprintln!("Session ended: {e}");
            }
            return Ok(());
        }
    };
    print!("{output}");
    Ok(())
}
