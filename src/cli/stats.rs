use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN};
use crate::board::read_board_file;
use crate::error::Result;
use std::path::Path;

/// Options for the stats command
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// One-shot gap override; the board's stored gap otherwise
    pub gap: Option<usize>,
}

/// Encrypt text against a board file and show letter statistics for the
/// resulting ciphertext.
pub fn show_stats(board_path: &Path, text: &str, options: &StatsOptions) -> Result<String> {
    let board = read_board_file(board_path)?;
    let cipher = match options.gap {
        Some(gap) => board.encrypt_with_gap(text, gap)?,
        None => board.encrypt(text)?,
    };

    if cipher.is_empty() {
        return Ok("No letters to analyze".to_string());
    }

    let freq = letter_frequencies(&cipher);
    let n = cipher.len();

    let mut output = String::new();

    output.push_str("Ciphertext Letter Analysis\n");
    output.push_str("==========================\n\n");
    output.push_str(&format!("File: {}\n", board_path.display()));
    output.push_str(&format!("Letters analyzed: {}\n", n));
    output.push_str(&format!("Ciphertext: {}\n\n", cipher));

    // Shannon entropy over the 26-letter alphabet
    let entropy = calculate_entropy(&freq, n);
    let max_entropy = (ALPHABET_LEN as f64).log2();
    output.push_str(&format!(
        "Shannon Entropy: {:.4} bits/letter ({:.1}% of max)\n",
        entropy,
        entropy / max_entropy * 100.0
    ));
    output.push_str(&format!(
        "  Interpretation: {}\n\n",
        interpret_entropy(entropy)
    ));

    // Chi-square against uniform letter use
    let chi_square = calculate_chi_square(&freq, n);
    let chi_p_value = chi_square_p_value(chi_square, ALPHABET_LEN - 1);
    output.push_str(&format!("Chi-Square: {:.2} (df=25)\n", chi_square));
    output.push_str(&format!("  P-value: {}\n", format_p_value(chi_p_value)));
    output.push_str(&format!(
        "  Interpretation: {}\n\n",
        interpret_chi_square(chi_p_value)
    ));

    // Index of coincidence
    let ic = index_of_coincidence(&freq, n);
    output.push_str(&format!("Index of Coincidence: {:.4}\n", ic));
    output.push_str(&format!("  Interpretation: {}\n\n", interpret_ic(ic)));

    // Letter frequency extremes
    let (most_common, least_common, unused) = letter_frequency_analysis(&freq);
    output.push_str("Letter Frequency:\n");
    output.push_str(&format!(
        "  Most common:  {} ({} times, {:.1}%)\n",
        most_common.0,
        most_common.1,
        most_common.1 as f64 / n as f64 * 100.0
    ));
    output.push_str(&format!(
        "  Least common: {} ({} times)\n",
        least_common.0, least_common.1
    ));
    output.push_str(&format!("  Unused letters: {}/26\n", unused));

    if n < 100 {
        output.push_str("\nNote: fewer than 100 letters; every statistic here is noisy.\n");
    }

    Ok(output)
}

fn letter_frequencies(text: &str) -> [usize; ALPHABET_LEN] {
    let mut freq = [0usize; ALPHABET_LEN];
    for c in text.chars() {
        if let Some(i) = letter_index(c) {
            freq[i] += 1;
        }
    }
    freq
}

/// Shannon entropy in bits per letter
fn calculate_entropy(freq: &[usize; ALPHABET_LEN], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let len = n as f64;
    let mut entropy = 0.0;
    for &count in freq {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}

fn interpret_entropy(entropy: f64) -> &'static str {
    if entropy >= 4.6 {
        "Excellent - letter use close to uniform"
    } else if entropy >= 4.2 {
        "Good - high letter diversity"
    } else if entropy >= 3.5 {
        "Moderate - some letter structure remains"
    } else {
        "Low - strong letter structure"
    }
}

/// Chi-square statistic against uniform letter use
fn calculate_chi_square(freq: &[usize; ALPHABET_LEN], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let expected = n as f64 / ALPHABET_LEN as f64;
    let mut chi_square = 0.0;
    for &count in freq {
        let diff = count as f64 - expected;
        chi_square += (diff * diff) / expected;
    }
    chi_square
}

/// Approximate p-value for chi-square (normal approximation)
fn chi_square_p_value(chi_square: f64, df: usize) -> f64 {
    let z = ((2.0 * chi_square).sqrt() - (2.0 * df as f64 - 1.0).sqrt()) / std::f64::consts::SQRT_2;
    0.5 * (1.0 - erf(z / std::f64::consts::SQRT_2))
}

/// Error function approximation
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();
    sign * y
}

fn format_p_value(p: f64) -> String {
    if p < 0.001 {
        "< 0.001".to_string()
    } else if p > 0.999 {
        "> 0.999".to_string()
    } else {
        format!("{:.3}", p)
    }
}

fn interpret_chi_square(p_value: f64) -> &'static str {
    if p_value < 0.01 || p_value > 0.99 {
        "SUSPECT - significant deviation from uniform letter use"
    } else if p_value < 0.05 || p_value > 0.95 {
        "Marginal - slight deviation from uniform letter use"
    } else {
        "PASS - consistent with uniform letter use"
    }
}

/// Index of coincidence: probability two sampled letters match.
/// Uniform random letters give ~0.0385, plain English ~0.066.
fn index_of_coincidence(freq: &[usize; ALPHABET_LEN], n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let total: f64 = freq.iter().map(|&f| (f * f.saturating_sub(1)) as f64).sum();
    total / (n * (n - 1)) as f64
}

fn interpret_ic(ic: f64) -> &'static str {
    if ic > 0.06 {
        "close to plain English text (~0.066)"
    } else if ic < 0.045 {
        "close to uniform random letters (~0.038)"
    } else {
        "between uniform letters and plain English"
    }
}

fn letter_frequency_analysis(
    freq: &[usize; ALPHABET_LEN],
) -> ((char, usize), (char, usize), usize) {
    let mut most_common = ('A', 0usize);
    let mut least_common = ('A', usize::MAX);
    let mut unused = 0usize;

    for (i, &count) in freq.iter().enumerate() {
        if count > most_common.1 {
            most_common = (index_letter(i), count);
        }
        if count < least_common.1 {
            least_common = (index_letter(i), count);
        }
        if count == 0 {
            unused += 1;
        }
    }

    (most_common, least_common, unused)
}
