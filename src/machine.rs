// machine.rs - Boot the kernel and drive the top-level EVALUATE loop

use std::io::Write;

use crate::interpreter::{Interpreter, Outcome, VmFault};
use crate::primitives::{CELL, VM};

/// Surface-language vocabulary compiled through the tokenizer at start-up:
/// comments, control flow, quotations, deferred words. The kernel knows
/// nothing about these; they are ordinary definitions.
const BOOTSTRAP: &str = include_str!("bootstrap.fth");

/// A booted Forth system: registered primitives, the three-cell top-level
/// loop `EVALUATE BRANCH <back>`, and the bootstrap vocabulary.
pub struct Machine {
    pub interpreter: Interpreter,
    entry_ip: i32,
    entry_np: i32,
}

impl Machine {
    pub fn new() -> Result<Self, VmFault> {
        Self::with_io(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    /// Boot a machine writing program output to `out` and dumps to `log`.
    pub fn with_io(out: Box<dyn Write>, log: Box<dyn Write>) -> Result<Self, VmFault> {
        let mut vm = VM::with_io(out, log);
        vm.register_primitives()?;

        // The REPL: EVALUATE, then BRANCH back to the EVALUATE cell.
        vm.align()?;
        let top = vm.here();
        vm.comma(vm.cfa_of("EVALUATE")?)?;
        vm.comma(vm.cfa_of("BRANCH")?)?;
        vm.comma(top)?;

        let entry_ip = vm.cell_at(top)?;
        let entry_np = top + CELL;

        let mut machine = Machine {
            interpreter: Interpreter::from_vm(vm),
            entry_ip,
            entry_np,
        };
        machine.interpret(BOOTSTRAP)?;
        Ok(machine)
    }

    /// Feed program text into the source stream and run the top-level loop
    /// until the stream runs dry or BYE executes.
    pub fn interpret(&mut self, text: &str) -> Result<Outcome, VmFault> {
        self.interpreter.vm.source.feed(text);
        self.run()
    }

    /// Resume the top-level loop on whatever source remains.
    pub fn run(&mut self) -> Result<Outcome, VmFault> {
        self.interpreter.execute(self.entry_ip, self.entry_np)
    }

    /// True while a DEF is still open (the STATE cell is non-zero), which
    /// the REPL uses for its continuation prompt.
    pub fn compiling(&self) -> bool {
        self.interpreter.vm.state() != 0
    }
}
