//! Bundled demo programs, run by `mini demo`.

/// What a demo program is expected to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// The run succeeds and its last `Return` prints this value.
    Returns(i32),
    /// The run fails.
    Fails,
}

/// A named example program.
#[derive(Clone, Copy, Debug)]
pub struct Demo {
    pub name: &'static str,
    pub source: &'static str,
    pub expected: Expected,
}

pub static DEMOS: [Demo; 4] = [
    Demo {
        name: "sum",
        source: "A = 2\nB = 8\nC = A + B\nC",
        expected: Expected::Returns(10),
    },
    Demo {
        name: "reassign",
        source: "A = 2\nB = 22\nZ = 91\nK = A + B\nZ = K + A\nZ",
        expected: Expected::Returns(26),
    },
    Demo {
        name: "literal-sum",
        source: "A = 2 + 1\nB = A + 9\nC = A + B\nA",
        expected: Expected::Returns(3),
    },
    // `A + B` on its own is not an instruction.
    Demo {
        name: "syntax-error",
        source: "A = 2 + 1\nB = A + 9\nC = A + B\nA + B",
        expected: Expected::Fails,
    },
];

/// Look up a demo by name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}
