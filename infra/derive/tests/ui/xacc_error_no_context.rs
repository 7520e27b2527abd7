use xacc_derive::xacc_error;

#[xacc_error]
pub enum DemoError {
    Io { source: std::io::Error },
}

fn main() {}
