use anyhow::Result;
use drt::DrtExpression;
use reedline::{DefaultPrompt, Reedline, Signal};

/// Parse a line, beta-reduce it, and resolve any pronouns it contains.
fn interpret(input: &str) -> Result<DrtExpression> {
    let expression = drt::parse(input)?;
    Ok(expression.simplify().resolve(&[])?)
}

/// Parse and simplify without resolving, for inspecting the raw structure.
fn compile(input: &str) -> Result<DrtExpression> {
    let expression = drt::parse(input)?;
    Ok(expression.simplify())
}

fn main() -> Result<()> {
    println!("==================================================");
    println!(" Featured DRT - Anaphora Resolution REPL           ");
    println!("==================================================");

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    println!("Ready. Commands: :quit :debug <expr> :help");
    println!("Enter a DRS expression to simplify and resolve, e.g.");
    println!("  ([x{{masc,sg}},e],[boy(x), walk(e), Agent(e,x)]) + ([u{{masc,sg}},e1],[PRO(u), smile(e1), Agent(e1,u)])\n");

    loop {
        let sig = line_editor.read_line(&prompt);
        match sig {
            Ok(Signal::Success(buffer)) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    ":quit" | ":q" => break,
                    ":help" | ":h" => {
                        println!("  <expr>          Simplify and resolve a DRS expression");
                        println!("  :debug <expr>   Show the simplified structure without resolving");
                        println!("  :quit           Exit");
                        continue;
                    }
                    _ => {}
                }

                if let Some(debug_text) = input.strip_prefix(":debug ") {
                    let text = debug_text.trim();
                    if text.is_empty() {
                        println!("[Host] Usage: :debug <expression>");
                        continue;
                    }
                    match compile(text) {
                        Ok(expression) => println!("[Structure] {}", expression),
                        Err(e) => println!("[Error] {}", e),
                    }
                } else {
                    match interpret(input) {
                        Ok(expression) => println!("[Resolved] {}", expression),
                        Err(e) => println!("[Error] {}", e),
                    }
                }
            }
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
