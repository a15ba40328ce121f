use std::io::{self, BufRead, Write};

pub trait Prompter {
    fn ask(&mut self, question: &str) -> io::Result<String>;
    fn ask_secret(&mut self, question: &str) -> io::Result<String>;
}

pub struct Terminal;

impl Prompter for Terminal {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(answer.trim().to_string())
    }

    fn ask_secret(&mut self, question: &str) -> io::Result<String> {
        rpassword::prompt_password(question)
    }
}

#[cfg(test)]
pub struct Scripted {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(answers: &[&str]) -> Scripted {
        Scripted {
            answers: answers.iter().map(|answer| answer.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompter for Scripted {
    fn ask(&mut self, _question: &str) -> io::Result<String> {
        Ok(self
            .answers
            .pop_front()
            .expect("scripted prompter ran out of answers"))
    }

    fn ask_secret(&mut self, question: &str) -> io::Result<String> {
        self.ask(question)
    }
}
