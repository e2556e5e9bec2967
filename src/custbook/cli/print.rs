use colored::Colorize;
use custbook::api::{CmdMessage, MessageLevel};
use custbook::model::Customer;
use custbook::table::render_table;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_customers(customers: &[Customer]) {
    println!("{}", render_table(customers));
}
