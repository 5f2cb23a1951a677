//! The `month` subcommand: render one page of the month pager.

use anyhow::{Context, Result};
use awde_agenda::{expand, EventInstance};
use awde_pager::{CalendarKind, MonthPageData, MonthPager, PageIndex, TOTAL_PAGES};
use chrono::Datelike;
use tracing::info;

use crate::cli::MonthArgs;
use crate::config::AwdeConfig;
use crate::dates;
use crate::events;
use crate::settings;

pub fn run(args: MonthArgs) -> Result<()> {
    let config = AwdeConfig::load(&args.config)?;
    let options = settings::grid_options(&config)?;
    let catalog = settings::holiday_catalog(&config)?;
    let class_filter = settings::class_filter(&config);

    let pager = MonthPager::new(dates::today()?);
    let page = resolve_page(&pager, &args, options.primary)?;

    let instances = match &args.events {
        Some(path) => {
            let definitions = events::load_events(path)?;
            let mut instances: Vec<EventInstance> = Vec::new();
            for definition in &definitions {
                instances.extend(expand(definition, None, None));
            }
            instances
        }
        None => Vec::new(),
    };

    let data = pager.month_page(page, &options, &catalog, class_filter, &instances)?;
    info!(page, month = %data.month, "rendering month page");
    render(&data, options.primary);
    Ok(())
}

fn resolve_page(pager: &MonthPager, args: &MonthArgs, primary: CalendarKind) -> Result<PageIndex> {
    if let (Some(year), Some(month)) = (args.year, args.month) {
        let date = awde_ethiopic::EthiopicDate::new(year, month, 1)?;
        return pager
            .page_for_date(date)
            .with_context(|| format!("month {year}-{month:02} is outside the pager range"));
    }
    let base = pager.today_page(primary);
    match args.page_offset {
        Some(offset) => {
            let target = base as i64 + offset;
            if !(0..TOTAL_PAGES as i64).contains(&target) {
                anyhow::bail!("page offset {offset} leaves the range of {TOTAL_PAGES} pages");
            }
            Ok(target as PageIndex)
        }
        None => Ok(base),
    }
}

fn render(data: &MonthPageData, primary: CalendarKind) {
    let (grid, title) = match primary {
        CalendarKind::Ethiopic => (
            &data.ethiopic_grid,
            format!(
                "{} {}",
                dates::month_name(data.month.month()),
                data.month.year()
            ),
        ),
        CalendarKind::Gregorian => {
            let (year, month) = data.gregorian_month.unwrap_or((0, 0));
            (&data.gregorian_grid, format!("{year}-{month:02}"))
        }
    };

    println!("{title:^34}");
    println!(" Mo   Tu   We   Th   Fr   Sa   Su");
    for week in grid {
        let mut line = String::new();
        for cell in week {
            let rendered = match cell.primary_day {
                Some(day) => {
                    let mut marks = String::new();
                    if !cell.holidays.is_empty() {
                        marks.push('*');
                    }
                    if cell.has_events {
                        marks.push('+');
                    }
                    if cell.is_today {
                        format!("[{day:>2}{marks}]")
                    } else if cell.is_current_month {
                        format!(" {day:>2}{marks} ")
                    } else {
                        format!(" ({day:>2}) ")
                    }
                }
                None => "     ".to_string(),
            };
            line.push_str(&format!("{rendered:<5}"));
        }
        println!("{}", line.trim_end());
    }

    if !data.holidays.is_empty() {
        println!();
        for holiday in &data.holidays {
            println!(
                "  * {} {} - {}",
                dates::month_name(holiday.date.month()),
                holiday.date.day(),
                holiday.title
            );
        }
    }
    if !data.events.is_empty() {
        println!();
        for event in &data.events {
            println!(
                "  + {} ({}) - {}",
                event.start.format("%Y-%m-%d %H:%M"),
                event.start.date_naive().weekday(),
                event.summary
            );
        }
    }
}
