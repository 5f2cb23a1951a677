//! The `agenda` subcommand: expand an event file and list the instances.

use anyhow::Result;
use awde_agenda::{expand, EventInstance, FilterState};
use tracing::info;

use crate::cli::AgendaArgs;
use crate::dates;
use crate::events;

pub fn run(args: AgendaArgs) -> Result<()> {
    let definitions = events::load_events(&args.events)?;

    let filter = if args.all {
        FilterState::show_all()
    } else {
        FilterState::default()
            .with_start(args.from.as_deref().map(dates::parse_gregorian).transpose()?)
            .with_end(args.to.as_deref().map(dates::parse_gregorian).transpose()?)
    };

    let mut instances: Vec<EventInstance> = Vec::new();
    for definition in &definitions {
        instances.extend(expand(definition, None, None));
    }
    instances.sort_by(|a, b| a.start.cmp(&b.start));

    let visible = filter.apply(&instances);
    info!(
        definitions = definitions.len(),
        instances = instances.len(),
        visible = visible.len(),
        "expanded agenda"
    );

    for instance in &visible {
        let recurring = if instance.recurring { " (recurring)" } else { "" };
        println!(
            "{}  {}  [{} {}]  {}{}",
            instance.start.format("%Y-%m-%d %H:%M %:z"),
            instance.summary,
            dates::month_name(instance.anchor.month()),
            instance.anchor.day(),
            instance
                .description
                .as_deref()
                .unwrap_or("-"),
            recurring,
        );
    }
    println!(
        "{} of {} instances shown{}",
        visible.len(),
        instances.len(),
        if filter.is_show_all() { " (show all)" } else { "" },
    );
    Ok(())
}
