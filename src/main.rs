use {
  clap::{Parser, Subcommand},
  crossterm::style::Stylize,
  hn_items::{Client, Comment, Config, Kind, Part, Poll, Story},
  std::{
    backtrace::BacktraceStatus,
    fmt::Display,
    io::{self, IsTerminal},
    process,
  },
  tracing_subscriber::EnvFilter,
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Debug, Parser)]
#[command(about = "Read items, users, and lists from the Hacker News API")]
struct Arguments {
  /// API root, overriding `HN_API_BASE_URI`
  #[arg(long, global = true)]
  base_uri: Option<String>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Recently changed items and profiles
  Changes,
  /// A comment by id
  Comment { id: u64 },
  /// Any item by id, whatever its kind
  Item { id: u64 },
  /// The newest item
  MaxItem,
  /// A poll option by id
  Part { id: u64 },
  /// A poll by id
  Poll { id: u64 },
  /// An item by id, narrowed to an explicit kind tag
  Resolve { kind: Kind, id: u64 },
  /// A story by id
  Story { id: u64 },
  /// The top stories on the front page
  Top {
    #[arg(long, default_value_t = 10)]
    count: usize,
  },
  /// A user profile by name
  User { name: String },
}

impl Command {
  async fn run(self, client: &Client) -> Result {
    match self {
      Command::Changes => print(client.changes().await?),
      Command::Comment { id } => print(client.comment(id).await?),
      Command::Item { id } => print(client.item(id).await?),
      Command::MaxItem => print(client.max_item().await?),
      Command::Part { id } => print(client.part(id).await?),
      Command::Poll { id } => print(client.poll(id).await?),
      Command::Resolve { kind, id } => match kind {
        Kind::Comment => print(client.fetch::<Comment>(id).await?),
        Kind::Poll => print(client.fetch::<Poll>(id).await?),
        Kind::PollOption => print(client.fetch::<Part>(id).await?),
        Kind::Story => print(client.fetch::<Story>(id).await?),
      },
      Command::Story { id } => print(client.story(id).await?),
      Command::Top { count } => {
        for (rank, story) in
          client.top_stories(count).await?.into_iter().enumerate()
        {
          if rank > 0 {
            println!();
          }

          println!("{}. {story}", rank + 1);
        }
      }
      Command::User { name } => print(client.user(&name).await?),
    }

    Ok(())
  }
}

fn initialize_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn print(value: impl Display) {
  println!("{value}");
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let mut config = Config::from_env();

  if let Some(base_uri) = arguments.base_uri {
    config.base_uri = base_uri;
  }

  let client = Client::new(config);

  arguments.command.run(&client).await
}

#[tokio::main]
async fn main() {
  initialize_tracing();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
