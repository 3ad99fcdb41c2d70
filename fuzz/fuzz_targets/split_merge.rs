#![no_main]

use hyperion_fuzz_utils::{Command, CommandSequence, RunnerState};
use libfuzzer_sys::fuzz_target;

// Small integers repeat often, which is the interesting case: nothing in the tree may depend on
// the values themselves.
fuzz_target!(|cmds: CommandSequence<Command<u8>>| {
    let mut runner: RunnerState<u8> = RunnerState::init();

    for c in &cmds.cmds {
        runner.run_cmd(c);
    }
});
