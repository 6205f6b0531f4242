use crate::cli::args::DumpArgs;
use crate::cli::handlers::read_input;
use crate::{BLOCK_BYTES, LANES, SELECTOR_BYTES, SelectorWidths};
use serde::Serialize;

/// One decoded block, as rendered by `dump --json`.
#[derive(Serialize)]
struct BlockDump {
    block: usize,
    selector: u32,
    widths: Vec<u32>,
    groups: Vec<Vec<u32>>,
}

pub fn handle(args: DumpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    if !input.len().is_multiple_of(BLOCK_BYTES) {
        return Err(format!(
            "input length {} is not a multiple of the {}-byte block size",
            input.len(),
            BLOCK_BYTES
        )
        .into());
    }

    let mut dumps = Vec::new();
    for (number, block) in input.chunks_exact(BLOCK_BYTES).enumerate() {
        let selector = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        let mut payload = [0u32; LANES];
        for (lane, word) in block[SELECTOR_BYTES..].chunks_exact(4).enumerate() {
            payload[lane] = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        }

        let widths: Vec<u32> = SelectorWidths::new(selector).collect();
        let mut groups = Vec::with_capacity(widths.len());
        for &width in &widths {
            let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
            groups.push(payload.iter().map(|&lane| lane & mask).collect::<Vec<u32>>());
            for lane in payload.iter_mut() {
                *lane = if width >= 32 { 0 } else { *lane >> width };
            }
        }

        dumps.push(BlockDump {
            block: number,
            selector,
            widths,
            groups,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dumps)?);
        return Ok(());
    }

    for dump in &dumps {
        println!(
            "block {}: selector {:#010x} widths {:?}",
            dump.block, dump.selector, dump.widths
        );
        for (slice, group) in dump.groups.iter().enumerate() {
            let rendered: Vec<String> = group.iter().map(|value| value.to_string()).collect();
            println!("  slice {} ({} bits): {}", slice, dump.widths[slice], rendered.join(" "));
        }
    }
    Ok(())
}
