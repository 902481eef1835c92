use std::io::{self, Write};

use packed_probe::{render, verify, Addresses, Packed, ProbeError};

fn main() -> Result<(), ProbeError> {
    verify()?;

    let probe = Packed::new();
    let addrs = Addresses::of(&probe);
    addrs.check()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(render(&addrs).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
