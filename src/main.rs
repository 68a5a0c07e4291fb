use std::io::Write as _;
use std::path::PathBuf;

use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heurdesk::models::{heuristic, CreateIssueInput, Top3Change, Worksheet};
use heurdesk::store::Store;
use heurdesk::timer::Countdown;
use heurdesk::{report, slides};

#[derive(Parser)]
#[command(name = "heurdesk")]
#[command(about = "Worksheet for Nielsen heuristic usability evaluations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the evaluating group (replaces the previous entry)
    Group {
        /// Group name
        #[arg(long)]
        name: String,

        /// Course or discipline
        #[arg(long, default_value = "")]
        course: String,

        /// Member name; repeat for each member
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// Record the interface under evaluation (replaces the previous entry)
    Iface {
        /// Interface category, e.g. "Academic system", "E-commerce", "Mobile app"
        #[arg(long, default_value = "Academic system")]
        kind: String,

        /// Interface name
        #[arg(long)]
        name: String,

        /// URL of the interface
        #[arg(long, default_value = "")]
        url: String,

        /// Simulated task; repeat for each task
        #[arg(short, long = "task")]
        tasks: Vec<String>,
    },
    /// Record a usability issue
    Add {
        /// Violated heuristic (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        heuristic: u8,

        /// Severity, 0 (cosmetic) to 4 (catastrophic)
        #[arg(long)]
        severity: u8,

        /// What the problem is
        #[arg(long)]
        desc: String,

        /// Proposed fix
        #[arg(long)]
        solution: String,
    },
    /// List recorded issues, most severe first
    List,
    /// Show an issue's fields as a ready-to-edit `add` command
    Edit {
        /// Issue id
        id: u32,
    },
    /// Delete an issue (asks for confirmation)
    Delete {
        /// Issue id
        id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Toggle an issue's membership in the top-3 selection
    Top3 {
        /// Issue id
        id: u32,
    },
    /// Print the ten Nielsen heuristics with guidance
    Heuristics,
    /// Generate the Markdown report
    Report {
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate the presentation slide sequence
    Slides {
        /// Emit the slides as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Start or resume the presentation countdown
    Timer {
        /// Minutes to count down from; omit to resume a persisted countdown
        minutes: Option<u64>,
    },
    /// Erase all worksheet data (asks for confirmation)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "heurdesk=warn".into()),
    );

    // Logs go to stderr so stdout stays clean for report/slide output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Ask a y/N question on the terminal. Anything but an explicit yes is a no.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn placeholder(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn print_summary(worksheet: &Worksheet) {
    println!("Group: {}", placeholder(&worksheet.group.name));
    println!(
        "Interface: {} ({})",
        placeholder(&worksheet.iface.name),
        placeholder(&worksheet.iface.kind)
    );
    println!("Issues: {}", worksheet.issues.len());
    println!(
        "Top 3: {}",
        if worksheet.top3.is_empty() {
            "none selected".to_string()
        } else {
            worksheet
                .top3
                .iter()
                .map(|id| format!("#{}", id))
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    match worksheet.timer_end {
        Some(end) => {
            let remaining = (end - Utc::now().timestamp_millis()).max(0) / 1000;
            println!(
                "Countdown: {} remaining",
                heurdesk::timer::format_hms(remaining as u64)
            );
        }
        None => println!("Countdown: idle"),
    }
}

fn print_issue_list(worksheet: &Worksheet) {
    if worksheet.issues.is_empty() {
        println!("No issues recorded yet.");
        return;
    }
    for issue in worksheet.issues_by_severity() {
        let marker = if worksheet.top3.contains(&issue.id) {
            " [top 3]"
        } else {
            ""
        };
        println!(
            "#{} — {} — Sev {}{}",
            issue.id,
            heuristic::title_for(issue.heuristic_id),
            issue.severity,
            marker
        );
        println!("  Problem:  {}", issue.desc);
        println!("  Solution: {}", issue.solution);
    }
}

/// Drive the countdown with a 1-second tick until it expires. The first
/// tick is immediate, so a deadline already in the past reports expiry at
/// once instead of waiting a full period.
async fn run_countdown(end_ms: i64) -> anyhow::Result<()> {
    let mut countdown = Countdown::new(end_ms);
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        interval.tick().await;
        let tick = countdown.tick(Utc::now().timestamp_millis());
        print!("\r{}", tick.display);
        std::io::stdout().flush()?;
        if tick.just_expired {
            println!();
            println!("Time's up! Finish the report and the slides.");
        }
        if tick.finished {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = Store::open_default()?;
    let mut worksheet = store.load();

    match cli.command {
        Some(Commands::Group {
            name,
            course,
            members,
        }) => {
            worksheet.set_group(&name, &course, members);
            store.save(&worksheet)?;
            println!("Group saved.");
        }
        Some(Commands::Iface {
            kind,
            name,
            url,
            tasks,
        }) => {
            worksheet.set_iface(&kind, &name, &url, tasks);
            store.save(&worksheet)?;
            println!("Interface saved.");
        }
        Some(Commands::Add {
            heuristic,
            severity,
            desc,
            solution,
        }) => {
            let issue = worksheet.add_issue(CreateIssueInput {
                heuristic_id: heuristic,
                severity,
                desc,
                solution,
            })?;
            let id = issue.id;
            store.save(&worksheet)?;
            println!("Recorded issue #{}.", id);
        }
        Some(Commands::List) => print_issue_list(&worksheet),
        Some(Commands::Edit { id }) => match worksheet.issue(id) {
            Some(issue) => {
                println!(
                    "heurdesk add --heuristic {} --severity {} --desc {:?} --solution {:?}",
                    issue.heuristic_id, issue.severity, issue.desc, issue.solution
                );
                println!(
                    "Adjust the fields and run the command to record the updated issue, \
                     then delete the original with `heurdesk delete {}`.",
                    id
                );
            }
            None => println!("No issue with id {}.", id),
        },
        Some(Commands::Delete { id, yes }) => {
            if worksheet.issue(id).is_none() {
                println!("No issue with id {}.", id);
            } else if yes || confirm(&format!("Delete issue #{}?", id))? {
                worksheet.delete_issue(id);
                store.save(&worksheet)?;
                println!("Deleted issue #{}.", id);
            } else {
                println!("Kept issue #{}.", id);
            }
        }
        Some(Commands::Top3 { id }) => {
            if worksheet.issue(id).is_none() {
                println!("No issue with id {}.", id);
            } else {
                let change = worksheet.toggle_top3(id)?;
                store.save(&worksheet)?;
                match change {
                    Top3Change::Added => println!("Issue #{} added to the top 3.", id),
                    Top3Change::Removed => println!("Issue #{} removed from the top 3.", id),
                }
            }
        }
        Some(Commands::Heuristics) => {
            for h in heuristic::catalog() {
                println!("{}. {}", h.id, h.title);
                println!("   {}", h.tip);
            }
        }
        Some(Commands::Report { out }) => {
            let md = report::build_report(&worksheet, Local::now());
            match out {
                Some(path) => {
                    std::fs::write(&path, &md)?;
                    println!("Report written to {}.", path.display());
                }
                None => print!("{}", md),
            }
        }
        Some(Commands::Slides { json }) => {
            let deck = slides::build_slides(&worksheet);
            if json {
                println!("{}", serde_json::to_string_pretty(&deck)?);
            } else {
                for (i, slide) in deck.iter().enumerate() {
                    println!("--- Slide {} ---", i + 1);
                    println!("{}", slide.title);
                    println!();
                    println!("{}", slide.body);
                    println!();
                }
            }
        }
        Some(Commands::Timer { minutes }) => {
            let end = match minutes {
                Some(minutes) => {
                    let end = worksheet.start_countdown(minutes, Utc::now().timestamp_millis());
                    store.save(&worksheet)?;
                    end
                }
                None => match worksheet.timer_end {
                    Some(end) => end,
                    None => {
                        println!(
                            "No countdown running. Start one with `heurdesk timer <minutes>`."
                        );
                        return Ok(());
                    }
                },
            };
            run_countdown(end).await?;
        }
        Some(Commands::Reset { yes }) => {
            if yes || confirm("This erases all saved worksheet data. Continue?")? {
                store.clear()?;
                println!("Worksheet reset.");
            } else {
                println!("Nothing erased.");
            }
        }
        None => print_summary(&worksheet),
    }

    Ok(())
}
