use crate::cli::args::EncodeArgs;
use crate::cli::handlers::{parse_integers, read_input, write_output};
use crate::{encode, encoded_upper_bound};

pub fn handle(args: EncodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    let values = parse_integers(&input, args.text)?;

    let mut encoded = vec![0u8; encoded_upper_bound(values.len())];
    let bytes = encode(&mut encoded, &values)?;
    encoded.truncate(bytes);

    write_output(args.output.as_ref(), &encoded)?;
    // The stream does not describe its own count; the caller needs it back
    // at decode time.
    eprintln!(
        "{} integers -> {} bytes ({} blocks)",
        values.len(),
        bytes,
        bytes / crate::BLOCK_BYTES
    );
    Ok(())
}
