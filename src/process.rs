use super::scanner::Scanner;
use std::cell::RefCell;
use std::fmt;
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidMode,
    ReadingNumber,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidMode => write!(f, "Error: Invalid mode"),
            Error::ReadingNumber => write!(f, "Error reading number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Complete,
    Failed(Error),
}

impl State {
    pub fn exit_code(self) -> i32 {
        match self {
            State::Complete => 0,
            State::Failed(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Double,
    Ignore(i32),
}

impl From<i32> for Mode {
    fn from(value: i32) -> Self {
        match value {
            1 => Mode::Double,
            other => Mode::Ignore(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Result(i32),
    Error(Error),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::Result(value) => write!(f, "Result: {}", value),
            Message::Error(error) => write!(f, "{}", error),
        }
    }
}

pub trait Input<T> {
    fn get(&self) -> Option<T>;
    fn skip(&self);
}

pub trait Output<T> {
    fn put(&self, value: T);
}

impl<T, I: Input<T>> Input<T> for &I {
    fn get(&self) -> Option<T> {
        (*self).get()
    }

    fn skip(&self) {
        (*self).skip()
    }
}

impl<T, O: Output<T>> Output<T> for &O {
    fn put(&self, value: T) {
        (*self).put(value)
    }
}

impl<R: Read> Input<i32> for RefCell<Scanner<R>> {
    fn get(&self) -> Option<i32> {
        self.borrow_mut().read_int()
    }

    fn skip(&self) {
        self.borrow_mut().skip_char()
    }
}

impl<W: Write> Output<Message> for RefCell<W> {
    fn put(&self, value: Message) {
        let mut writer = self.borrow_mut();
        let _ = writeln!(writer, "{}", value);
        let _ = writer.flush();
    }
}

pub struct Process<I, O> {
    name: String,
    input: I,
    output: O,
    debug: bool,
}

impl<I: Input<i32>, O: Output<Message>> Process<I, O> {
    pub fn new(name: String, input: I, output: O) -> Self {
        Process {
            name,
            input,
            output,
            debug: false,
        }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn trace(&self, args: fmt::Arguments) {
        if self.debug {
            eprintln!("{}: {}", self.name, args);
        }
    }

    fn fail(&self, error: Error) -> State {
        self.output.put(Message::Error(error));
        State::Failed(error)
    }

    fn run(&self) -> State {
        let mode = match self.input.get() {
            Some(value) => value,
            None => return self.fail(Error::InvalidMode),
        };
        self.trace(format_args!("read mode {}", mode));

        self.input.skip();

        match Mode::from(mode) {
            Mode::Double => {
                let number = match self.input.get() {
                    Some(value) => value,
                    None => return self.fail(Error::ReadingNumber),
                };
                self.trace(format_args!("read number {}", number));
                self.output.put(Message::Result(number.wrapping_mul(2)));
            }
            Mode::Ignore(other) => self.trace(format_args!("nothing to do for mode {}", other)),
        }

        State::Complete
    }

    pub fn execute(&mut self) -> State {
        let state = self.run();
        self.trace(format_args!("{:?}", state));
        state
    }
}
