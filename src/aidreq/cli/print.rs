use aidreq::config::AidreqConfig;
use aidreq::error::Result;
use aidreq::model::ItemRequest;
use aidreq::pagination::PaginatedResult;
use aidreq::status::RequestStatus;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 120;
const ID_WIDTH: usize = 36;
const STATUS_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const TIME_WIDTH: usize = 16;
const GAP: &str = "  ";

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_requests(result: &PaginatedResult<ItemRequest>) {
    if result.total_records == 0 {
        println!("No requests found.");
        return;
    }

    if result.data.is_empty() {
        println!("No requests on this page.");
    }

    for request in &result.data {
        println!("{}", format_row(request));
    }

    println!();
    print_info(&footer(result));
}

pub(super) fn print_request(request: &ItemRequest) {
    println!("{}", request.item_requested.bold());
    println!("--------------------------------");
    println!("{:<10}{}", "Id", request.id);
    println!("{:<10}{}", "Requestor", request.requestor_name);
    println!("{:<10}{}", "Status", status_colored(request.status));
    println!(
        "{:<10}{} ({})",
        "Created",
        request.request_created_date.format("%Y-%m-%d %H:%M UTC"),
        format_time_ago(request.request_created_date).trim()
    );
    if let Some(edited) = request.last_edited_date {
        println!(
            "{:<10}{} ({})",
            "Edited",
            edited.format("%Y-%m-%d %H:%M UTC"),
            format_time_ago(request.last_activity()).trim()
        );
    }
}

pub(super) fn print_config(config: &AidreqConfig, keys: &[&str]) {
    for key in keys {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_row(request: &ItemRequest) -> String {
    let label = pad_to_width(request.status.label(), STATUS_WIDTH);
    let name = pad_to_width(
        &truncate_to_width(&request.requestor_name, NAME_WIDTH),
        NAME_WIDTH,
    );

    let fixed = ID_WIDTH + STATUS_WIDTH + NAME_WIDTH + TIME_WIDTH + GAP.width() * 3;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let item = truncate_to_width(&request.item_requested, available);
    let padding = available.saturating_sub(item.width());

    format!(
        "{}{gap}{}{gap}{}{gap}{}{}{}",
        request.id.to_string().dimmed(),
        colorize(request.status, &label),
        name,
        item,
        " ".repeat(padding),
        format_time_ago(request.request_created_date).dimmed(),
        gap = GAP
    )
}

fn footer(result: &PaginatedResult<ItemRequest>) -> String {
    let noun = if result.total_records == 1 {
        "request"
    } else {
        "requests"
    };
    format!(
        "Page {} of {} ({} {})",
        result.current_page, result.total_pages, result.total_records, noun
    )
}

fn status_colored(status: RequestStatus) -> ColoredString {
    colorize(status, status.label())
}

fn colorize(status: RequestStatus, text: &str) -> ColoredString {
    match status {
        RequestStatus::Pending => text.yellow(),
        RequestStatus::Approved => text.cyan(),
        RequestStatus::Completed => text.green(),
        RequestStatus::Rejected => text.red(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
