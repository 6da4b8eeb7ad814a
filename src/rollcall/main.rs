use clap::Parser;
use colored::*;
use rollcall::api::{CmdMessage, CmdResult, MessageLevel};
use rollcall::commands::find::Lookup;
use rollcall::error::Result;
use rollcall::init::{initialize, RollcallContext};
use rollcall::model::{AttendanceStatus, Student};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ExportFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = initialize(cli.data_dir.clone())?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Find { barcode, id }) => handle_find(&ctx, barcode, id),
        Some(Commands::Checkin { id }) => report(ctx.api.check_in(&id)?),
        Some(Commands::Checkout { id }) => report(ctx.api.check_out(&id)?),
        Some(Commands::Reset { id, all }) => {
            if all {
                report(ctx.api.reset_all()?)
            } else {
                // clap guarantees an id when --all is absent
                report(ctx.api.reset_one(&id.unwrap_or_default())?)
            }
        }
        Some(Commands::Export(format)) => match format {
            ExportFormat::Spreadsheet { output } => report(ctx.api.export_spreadsheet(output)?),
            ExportFormat::Barcodes { output, ids } => {
                report(ctx.api.export_barcodes(&ids, output)?)
            }
        },
    }
}

fn handle_list(ctx: &RollcallContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_roster(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &RollcallContext, barcode: Option<String>, id: Option<String>) -> Result<()> {
    let lookup = match (barcode, id) {
        (_, Some(id)) => Lookup::Id(id),
        (Some(code), None) => Lookup::Barcode(code),
        // clap enforces one of the two
        (None, None) => unreachable!(),
    };
    let result = ctx.api.find(&lookup)?;
    for student in &result.listed {
        print_student(student);
    }
    print_messages(&result.messages);
    Ok(())
}

fn report(result: CmdResult) -> Result<()> {
    // Batch operations only get the summary message.
    if let [student] = result.affected.as_slice() {
        print_student(student);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_student(student: &Student) {
    println!("{}  {}", student.id.bold(), student.full_name());
    println!("      barcode:     {}", student.barcode);
    println!(
        "      checked in:  {}",
        student.checked_in_time.as_deref().unwrap_or("-")
    );
    println!(
        "      checked out: {}",
        student.checked_out_time.as_deref().unwrap_or("-")
    );
}

fn print_roster(students: &[Student]) {
    if students.is_empty() {
        return;
    }

    let name_width = students
        .iter()
        .map(|s| s.full_name().width())
        .max()
        .unwrap_or(0);
    let id_width = students.iter().map(|s| s.id.width()).max().unwrap_or(0);

    for student in students {
        let name = student.full_name();
        let pad = " ".repeat(name_width.saturating_sub(name.width()));
        let id_pad = " ".repeat(id_width.saturating_sub(student.id.width()));
        println!(
            "  {}{}  {}{}  {}",
            student.id.bold(),
            id_pad,
            name,
            pad,
            status_text(student)
        );
    }
}

fn status_text(student: &Student) -> ColoredString {
    match student.status() {
        AttendanceStatus::Absent => "absent".dimmed(),
        AttendanceStatus::Present => format!(
            "present since {}",
            student.checked_in_time.as_deref().unwrap_or_default()
        )
        .green(),
        AttendanceStatus::Completed => format!(
            "completed {} to {}",
            student.checked_in_time.as_deref().unwrap_or_default(),
            student.checked_out_time.as_deref().unwrap_or_default()
        )
        .normal(),
    }
}
