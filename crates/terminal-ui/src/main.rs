use anyhow::Result;

use terminal_ui::run;

fn main() -> Result<()> {
    run(std::env::args().nth(1))
}
