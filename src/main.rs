use clap::Parser;
use todos::application::{clear_completed, init::init, toggle_all, ConfigService, Model};
use todos::cli::{format_count, format_store_list, format_todo_list, Cli, Commands};
use todos::domain::{parse_id, ReadQuery, TodoId, TodoPatch, TodoQuery};
use todos::error::TodoError;
use todos::infrastructure::{FileStorage, FileSystemRepository, TodoRepository};
use todos::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_model() -> Result<Model<FileStorage>, TodoError> {
    let repo = FileSystemRepository::discover()?;
    Ok(Model::new(repo.open_store()?))
}

/// Parse an id argument and make sure the todo exists
fn existing_id(model: &Model<FileStorage>, raw: &str) -> Result<TodoId, TodoError> {
    let id = parse_id(raw).ok_or_else(|| TodoError::InvalidId(raw.to_string()))?;
    if model.read(id)?.is_empty() {
        return Err(TodoError::TodoNotFound(id));
    }
    Ok(id)
}

fn run(cli: Cli) -> Result<(), TodoError> {
    match cli.command {
        Some(Commands::Init { path, name }) => init(&path, &name),
        Some(Commands::Add { title }) => {
            let mut model = open_model()?;
            let title = title.join(" ");
            let saved = model.create(Some(title.as_str()))?;
            print!("{}", format_todo_list(&saved));
            Ok(())
        }
        Some(Commands::List {
            id,
            active,
            completed,
            title,
        }) => {
            let model = open_model()?;

            let query = match id {
                Some(id) => ReadQuery::Id(id),
                None => {
                    let mut fields = TodoQuery::any();
                    if active {
                        fields = fields.and_completed(false);
                    }
                    if completed {
                        fields = fields.and_completed(true);
                    }
                    if let Some(title) = title {
                        fields = fields.and_title(title);
                    }
                    if fields == TodoQuery::any() {
                        ReadQuery::All
                    } else {
                        ReadQuery::Fields(fields)
                    }
                }
            };

            let todos = model.read(query)?;
            let output = format_todo_list(&todos);
            if todos.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Some(Commands::Done { id }) => set_completed(&id, true),
        Some(Commands::Undo { id }) => set_completed(&id, false),
        Some(Commands::Edit { id, title }) => {
            let mut model = open_model()?;
            let id = existing_id(&model, &id)?;
            let title = title.join(" ").trim().to_string();
            model.update(id, TodoPatch::title(title))?;
            print!("{}", format_todo_list(&model.read(id)?));
            Ok(())
        }
        Some(Commands::Rm { id }) => {
            let mut model = open_model()?;
            let id = existing_id(&model, &id)?;
            let left = model.remove(id)?;
            println!("Removed {} ({} left)", id, left.len());
            Ok(())
        }
        Some(Commands::Clear { completed }) => {
            let mut model = open_model()?;
            if completed {
                let removed = clear_completed(&mut model)?;
                println!("Removed {} completed todo(s)", removed);
            } else {
                model.remove_all()?;
                println!("Removed all todos");
            }
            Ok(())
        }
        Some(Commands::ToggleAll { undo }) => {
            let mut model = open_model()?;
            let changed = toggle_all(&mut model, !undo)?;
            let state = if undo { "active" } else { "completed" };
            println!("Marked {} todo(s) {}", changed, state);
            Ok(())
        }
        Some(Commands::Count) => {
            let model = open_model()?;
            println!("{}", format_count(&model.count()?));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("name = {}", config.name);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: todos config [--list | <key> [<value>]]");
                println!("Valid keys: name, created");
                Ok(())
            }
        }
        Some(Commands::Stores) => {
            let repo = FileSystemRepository::discover()?;
            let active = repo.load_config()?.store_name();
            let output = format_store_list(&repo.list_stores()?, &active);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        None => {
            println!("todos - Minimal terminal todo list");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn set_completed(raw_id: &str, completed: bool) -> Result<(), TodoError> {
    let mut model = open_model()?;
    let id = existing_id(&model, raw_id)?;
    model.update(id, TodoPatch::completed(completed))?;
    print!("{}", format_todo_list(&model.read(id)?));
    Ok(())
}
