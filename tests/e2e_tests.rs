use tac_compiler::compile;

use std::{
    fs,
    path::{Path, PathBuf},
};

const TESTFILE_DIRNAME: &str = "test_programs/";

#[test]
fn run_all_testcases() {
    let mut paths: Vec<PathBuf> = Vec::new();
    for file in fs::read_dir(Path::new(TESTFILE_DIRNAME)).expect("Failed to open test directory!") {
        let path = file.expect("Failed to open a test file!").path();
        paths.push(path);
    }
    paths.sort();
    let mut tests = E2ETests::new(paths);
    tests.run_all();
    tests.output();
}

/// Expectations of a single case. A case is source code interleaved with
/// lines starting with `tac `, `asm `, `symbol ` or `error `.
#[derive(Default)]
struct Case {
    code: String,
    tac: Vec<String>,
    asm: Vec<String>,
    symbols: Vec<String>,
    errors: Vec<String>,
}

impl Case {
    fn parse(text: &str) -> Self {
        let mut case = Case::default();
        for line in text.lines() {
            if let Some(rest) = line.strip_prefix("tac ") {
                case.tac.push(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("asm ") {
                case.asm.push(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("symbol ") {
                case.symbols.push(symbol_row(rest));
            } else if let Some(rest) = line.strip_prefix("error ") {
                case.errors.push(rest.to_string());
            } else {
                case.code.push_str(line);
                case.code.push('\n');
            }
        }
        case
    }
}

/// `x int 0 Yes` in the layout of a symbol table row.
fn symbol_row(expectation: &str) -> String {
    let fields: Vec<&str> = expectation.split_whitespace().collect();
    match fields.as_slice() {
        [name, declared_type, level, initialized] => {
            format!("{name}\t{declared_type}\t\t{level}\t{initialized}")
        }
        _ => panic!("Malformed symbol expectation '{expectation}'"),
    }
}

struct E2ETests {
    paths: Vec<PathBuf>,
    results: Vec<Result<(), String>>,
}

impl E2ETests {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            results: Vec::new(),
        }
    }

    pub fn run_all(&mut self) {
        for path in self.paths.clone() {
            self.run_testfile(&path);
        }
    }

    pub fn output(&self) {
        if self.results.len() != self.paths.len() {
            panic!(
                "{} out of {} tests run",
                self.results.len(),
                self.paths.len()
            );
        }
        let failures: Vec<&String> = self
            .results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .collect();
        if failures.is_empty() {
            return;
        }
        let mut output = format!(
            "E2E tests: {} passed; {} failed;\n\nfailures:\n",
            self.paths.len() - failures.len(),
            failures.len()
        );
        for failure in failures {
            output.push_str(format!("{failure}\n").as_str());
        }

        panic!("{}", output);
    }

    fn run_testfile(&mut self, path: &Path) {
        let testfile = fs::read_to_string(path).unwrap_or_else(|_| {
            panic!("Failed to read testfile {}", path.to_string_lossy())
        });
        for (index, case) in testfile.split("---\n").enumerate() {
            if let Err(reason) = run_testcase(&Case::parse(case)) {
                self.results
                    .push(Err(format!("{} case {}: {}", path.display(), index, reason)));
                return;
            }
        }
        self.results.push(Ok(()));
    }
}

fn run_testcase(case: &Case) -> Result<(), String> {
    let result = compile(&case.code);

    if !case.errors.is_empty() {
        let err = match result {
            Ok(_) => return Err("expected an error, compilation succeeded".to_string()),
            Err(err) => err.to_string(),
        };
        for expected in &case.errors {
            if !err.contains(expected.as_str()) {
                return Err(format!("error '{err}' does not mention '{expected}'"));
            }
        }
        return Ok(());
    }

    let compilation = result.map_err(|err| format!("unexpected error: {err}"))?;

    if !case.tac.is_empty() {
        let tac: Vec<String> = compilation
            .instructions
            .iter()
            .map(|instruction| instruction.to_string())
            .collect();
        if tac != case.tac {
            return Err(format!("tac {:?} != {:?}", tac, case.tac));
        }
    }

    if !case.asm.is_empty() && compilation.assembly != case.asm {
        return Err(format!("asm {:?} != {:?}", compilation.assembly, case.asm));
    }

    let table = compilation.symbols.to_string();
    for row in &case.symbols {
        if !table.lines().any(|line| line == row) {
            return Err(format!("symbol row '{row}' missing from\n{table}"));
        }
    }

    Ok(())
}
