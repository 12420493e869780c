#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;
use std::io::{stdout, Write};

use chj_conslist::conslist::{cons, nil, List};
use chj_conslist::fp::{filter, map, sum};
use chj_conslist::list;

#[derive(clap::Parser, Debug)]
/// Demonstrate the persistent cons list: build a couple of sample
/// lists, then map, filter and sum them, printing each list together
/// with its sum. Takes no arguments.
#[clap(name = "listdemo from chj-conslist")]
struct Opt {}

fn main() -> Result<()> {
    env_logger::init();
    let _opt: Opt = Opt::parse();

    // The list [1,2,3], spelled out.
    let r#as: List<i32> = cons(1, cons(2, cons(3, nil())));

    // The list [1,2,3] again, via the right-associative macro.
    let bs = list![1, 2, 3];

    // Elements doubled from the list bs.
    let cs = map(|x| x * 2, &bs);

    // Odd elements removed from the list bs.
    let ds = filter(|x| x % 2 == 0, &bs);

    debug!("constructed bs = {}", bs);

    let mut out = stdout();
    writeln!(out, "sum({}) = {}", r#as, sum(&r#as))?;
    writeln!(out, "sum({}) = {}", bs, sum(&bs))?;
    writeln!(out, "sum({}) = {}", cs, sum(&cs))?;
    writeln!(out, "sum({}) = {}", ds, sum(&ds))?;

    Ok(())
}
