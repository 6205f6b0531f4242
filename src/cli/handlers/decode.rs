use crate::cli::args::DecodeArgs;
use crate::cli::handlers::{read_input, render_integers, write_output};
use crate::{LANES, decode, decoded_capacity};

pub fn handle(args: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;

    // One lane group of slack: a stream encoded from zero integers still
    // carries one padding block.
    let mut decoded = vec![0u32; decoded_capacity(args.count) + LANES];
    decode(&mut decoded, args.count, &input)?;
    decoded.truncate(args.count);

    write_output(args.output.as_ref(), &render_integers(&decoded, args.text))?;
    Ok(())
}
