use owo_colors::OwoColorize;

use crate::models::Breakdown;

// Fill glyphs used in place of color, cycled per segment
const FILL_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

/// Splits `width` cells between `counts` in proportion, using the largest
/// remainder method so the cells always add up to `width` (or 0 when every
/// count is 0).
pub fn allocate_cells(counts: &[u64], width: usize) -> Vec<usize> {
    let total: u128 = counts.iter().map(|&c| c as u128).sum();
    if total == 0 || width == 0 {
        return vec![0; counts.len()];
    }

    let width_wide = width as u128;
    let mut cells: Vec<usize> = Vec::with_capacity(counts.len());
    let mut remainders: Vec<u128> = Vec::with_capacity(counts.len());
    for &count in counts {
        let scaled = count as u128 * width_wide;
        cells.push((scaled / total) as usize);
        remainders.push(scaled % total);
    }

    let assigned: usize = cells.iter().sum();
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    for &i in order.iter().take(width - assigned) {
        cells[i] += 1;
    }

    cells
}

/// Glyph drawn for the `position`th bar segment when color is off.
pub fn fill_glyph(position: usize) -> char {
    FILL_GLYPHS[position % FILL_GLYPHS.len()]
}

/// One line of proportional segments: response entries, then memory entries.
pub fn render_bar(breakdown: &Breakdown, width: usize, color: bool) -> String {
    let counts: Vec<u64> = breakdown.bars().map(|(_, _, e)| e.usage_count).collect();
    let cells = allocate_cells(&counts, width);

    breakdown
        .bars()
        .zip(cells)
        .enumerate()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(position, ((_, _, entry), n))| {
            if color {
                let c = entry.color;
                "█".repeat(n).truecolor(c.r, c.g, c.b).to_string()
            } else {
                fill_glyph(position).to_string().repeat(n)
            }
        })
        .collect()
}
