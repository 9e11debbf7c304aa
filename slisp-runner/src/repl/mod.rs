mod printer;
mod reader;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use slisp_interpreter::render::render_result;
use slisp_interpreter::Interpreter;

use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    interpreter: Interpreter,
    keep_environment: bool,
}

impl Repl {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Line(line) => {
                    let output = evaluate(&mut self.interpreter, &line, self.keep_environment);
                    printer::print_lines(&output);
                }
            }
        }
    }
}

/// Runs one input line and returns the lines to show for it.
///
/// A semantic error resets the environment unless `keep_environment` is set.
/// The draw queue is drained whenever the line was evaluated.
fn evaluate(interpreter: &mut Interpreter, line: &str, keep_environment: bool) -> Vec<String> {
    if let Err(error) = interpreter.parse(line) {
        return vec![printer::error_line(&error)];
    }

    let output = match interpreter.eval() {
        Ok(result) => render_result(&result).into_iter().collect(),
        Err(error) => {
            if !keep_environment {
                interpreter.reset_environment();
            }
            vec![printer::error_line(&error)]
        }
    };
    printer::print_graphics(&interpreter.drain_graphics());
    output
}

pub fn start(keep_environment: bool) -> Result<(), ReadlineError> {
    let rl = DefaultEditor::new()?;

    Repl {
        reader: Reader::new(rl),
        interpreter: Interpreter::new(),
        keep_environment,
    }
    .run();
    Ok(())
}
