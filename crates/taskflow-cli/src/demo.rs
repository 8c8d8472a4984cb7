//! `taskflow demo`: a sprint-planning walkthrough over an in-memory store.

use taskflow_core::app::{TaskBoard, ViewFilter, pending_summary, render_task};
use taskflow_core::collection;
use taskflow_core::impls::InMemoryTaskStore;
use taskflow_core::ports::{SystemClock, UlidGenerator};
use taskflow_core::Task;

fn section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", title.to_uppercase());
    println!("{}", "=".repeat(60));
}

fn show(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
    }
    for (i, task) in tasks.iter().enumerate() {
        println!("{:>2}. {}", i + 1, render_task(task));
    }
}

pub fn run() -> anyhow::Result<()> {
    let mut board = TaskBoard::open(
        InMemoryTaskStore::new(),
        SystemClock,
        UlidGenerator::new(SystemClock),
    )?;

    section("Adding tasks");
    let auth = board.add("Implement user authentication", Some("high"))?;
    board.add("Write API documentation", Some("medium"))?;
    let tests = board.add("Set up test environment", Some("high"))?;
    board.add("Update project dependencies", Some("low"))?;
    board.add("Review payment module code", Some("high"))?;
    board.add("Add audit logging", None)?;
    board.add("Fix contact form bugs", Some("low"))?;
    show(board.tasks());

    section("Completing two tasks");
    board.complete(auth)?;
    board.complete(tests)?;
    show(&board.view(ViewFilter::All));
    println!("{}", pending_summary(board.tasks()));

    section("Pending tasks");
    show(&board.view(ViewFilter::Pending));

    section("Completed tasks");
    show(&board.view(ViewFilter::Completed));

    section("High priority");
    show(&board.view("high".parse()?));

    section("Pending, by priority");
    show(&board.by_priority(Some(false)));

    section("Newest first");
    show(&collection::sort_by_date(board.tasks()));

    section("Search: \"CODE\"");
    show(&board.search(Some("CODE")));

    section("Removing a task");
    let before = board.tasks().len();
    if let Some(last) = board.tasks().last().map(Task::id) {
        board.remove(last)?;
    }
    println!("before: {before}, after: {}", board.tasks().len());

    section("Statistics");
    println!("{}", board.stats());

    section("Rejected input");
    for (description, priority) in [("   ", None), ("Ship it", Some("urgent"))] {
        if let Err(e) = board.add(description, priority) {
            println!("{e}");
        }
    }

    println!("\n{} saves made to the in-memory store.", board.store().save_count());
    Ok(())
}
