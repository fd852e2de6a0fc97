use clap::Parser;
use nagare::prelude::*;
use std::fs;
use std::io::{self, Write};

/// A linear flow-graph editor engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a multi-line outline text file to render as a flowchart
    outline_path: Option<String>,

    /// Also print the rendered element list as JSON
    #[arg(short, long)]
    json: bool,

    /// Run a scripted editor session instead of rendering an outline
    #[arg(short, long)]
    demo: bool,

    /// Run in interactive mode: a sign-in gated editor session
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else if cli.demo {
        run_demo(cli.json);
    } else {
        run_outline(cli);
    }
}

/// Renders an outline file: one block per non-blank line, arrows between
/// consecutive blocks.
fn run_outline(cli: Cli) {
    let path = cli
        .outline_path
        .unwrap_or_else(|| exit_with_error("An outline path is required (or pass --demo / -i)."));

    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read outline '{}': {}", path, e)));

    let outline = Outline::parse(&text);
    if outline.is_empty() {
        exit_with_error(&format!("Outline '{}' contains no non-blank lines.", path));
    }

    let mut surface = AsciiSurface::new();
    outline.render_to(&mut surface);
    println!("{}", surface.render());

    if cli.json {
        print_elements_json(surface.elements());
    }
}

/// A scripted editor session: builds a chain, deletes a middle activity,
/// and shows the resulting (deliberately under-connected) rendering.
fn run_demo(json: bool) {
    let mut editor = FlowEditor::new(AsciiSurface::new());

    editor.add_start();
    editor.append_activity("Collect order");
    let pack = editor
        .append_activity("Pack items")
        .expect("label is non-blank");
    editor.append_activity("Ship");
    editor.add_end();

    println!("--- Full chain ---");
    println!("{}", editor.surface().render());

    editor.remove_activity(pack);
    println!("--- After deleting the middle activity ---");
    println!("{}", editor.surface().render());
    println!(
        "Connector deficit after middle deletion: {}",
        editor.connector_deficit()
    );

    if json {
        print_elements_json(editor.surface().elements());
    }
}

/// Runs the CLI in an interactive, human-friendly mode: the editor is
/// gated behind the login overlay, exactly like the hosted builder.
fn run_interactive() {
    println!("--- Nagare Interactive Mode ---");

    let mut sessions = SessionController::new(InMemoryProvider::new());
    let mut editor = FlowEditor::new(AsciiSurface::new());

    loop {
        if sessions.overlay_visible() {
            println!("\nYou are signed out. Commands: signup, login, reset, quit");
        }

        let line = prompt_for_input("nagare", None);
        let (command, rest) = split_command(&line);

        if sessions.overlay_visible() {
            match command {
                "signup" | "login" | "reset" => handle_account_command(&mut sessions, command),
                "quit" | "exit" => break,
                "" => {}
                _ => println!("Please sign in first."),
            }
            continue;
        }

        match command {
            "start" => {
                if editor.add_start().is_none() {
                    println!("Start marker already present.");
                }
                println!("{}", editor.surface().render());
            }
            "add" => {
                if editor.append_activity(rest).is_none() {
                    println!("Activity labels must not be blank.");
                }
                println!("{}", editor.surface().render());
            }
            "end" => {
                if editor.add_end().is_none() {
                    println!("An end marker needs at least one activity, and only one end is allowed.");
                }
                println!("{}", editor.surface().render());
            }
            "del" => {
                match find_activity(&editor, rest) {
                    Some(id) => {
                        editor.remove_activity(id);
                        println!("{}", editor.surface().render());
                    }
                    None => println!("No activity labeled '{}'.", rest),
                }
            }
            "show" => println!("{}", editor.surface().render()),
            "json" => print_elements_json(editor.surface().elements()),
            "reset" => {
                editor.reset();
                println!("Editor reset.");
            }
            "logout" => {
                if let Err(e) = sessions.sign_out() {
                    println!("{}", e);
                }
            }
            "quit" | "exit" => break,
            "" => {}
            _ => println!(
                "Commands: start, add <label>, end, del <label>, show, json, reset, logout, quit"
            ),
        }
    }
}

/// Prompts for credentials and applies one of the account actions,
/// printing the provider's message verbatim on failure.
fn handle_account_command(sessions: &mut SessionController<InMemoryProvider>, command: &str) {
    let email = prompt_for_input("Email", None);

    let result = match command {
        "reset" => sessions.reset_password(&email),
        _ => {
            let password = prompt_for_input("Password", None);
            match command {
                "signup" => sessions.sign_up(&email, &password),
                _ => sessions.sign_in(&email, &password),
            }
        }
    };

    match result {
        Ok(()) if command == "reset" => println!("Password reset requested for {}.", email),
        Ok(()) => println!("Signed in as {}.", email),
        Err(e) => println!("{}", e),
    }
}

fn find_activity(editor: &FlowEditor<AsciiSurface>, label: &str) -> Option<NodeId> {
    editor
        .graph()
        .activities()
        .iter()
        .find(|node| node.label == label)
        .map(|node| node.id)
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn print_elements_json(elements: &[Element]) {
    match serde_json::to_string_pretty(elements) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize elements: {}", e),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
