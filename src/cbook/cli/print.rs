use cbook::api::{CmdMessage, CmdResult, MessageLevel};
use cbook::config::{CbookConfig, KEYS};
use cbook::model::Contact;
use colored::Colorize;
use std::io::{self, Write};

pub fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_contacts(out, &result.listed_contacts)?;
    print_pages(out, &result.pages)?;
    if let Some(config) = &result.config {
        print_config(out, config)?;
    }
    print_messages(out, &result.messages)
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

fn print_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", "Contacts:".bold())?;
    for contact in contacts {
        writeln!(out, "{}", contact.describe())?;
    }
    Ok(())
}

fn print_pages<W: Write>(out: &mut W, pages: &[Vec<Contact>]) -> io::Result<()> {
    for (i, page) in pages.iter().enumerate() {
        writeln!(out, "{}", format!("Page № {}", i + 1).yellow())?;
        for contact in page {
            writeln!(out, "{}", contact.describe())?;
        }
    }
    Ok(())
}

pub fn print_config<W: Write>(out: &mut W, config: &CbookConfig) -> io::Result<()> {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}
