use crate::PropagationResult;

/// Line framing the top and bottom of a report.
pub const REPORT_BANNER: &str = "---------------------------------------------------";
/// Significant digits used for every number in a report.
pub const REPORT_PRECISION: usize = 10;

/// Formats `value` with `digits` significant digits the way C's `%g` does.
///
/// Fixed notation is used when the decimal exponent lies in `-4..digits`,
/// scientific notation otherwise. Trailing zeros are removed in both cases.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    // rounding to `digits` first decides the exponent, as in C
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

impl PropagationResult {
    /// Renders the multi-line text shown in the calculator's output box.
    pub fn report(&self) -> String {
        let g = |value: f64| format_significant(value, REPORT_PRECISION);

        [
            REPORT_BANNER.to_string(),
            "INPUT PARAMETERS (Converted to inches internally):".to_string(),
            format!("  L_inch = {} inches", g(self.geometry.length_in)),
            format!("  W_inch = {} inches", g(self.geometry.width_in)),
            format!("  Er     = {}", g(self.geometry.dielectric)),
            String::new(),
            "EFFECTIVE LENGTHS (inches => meters):".to_string(),
            format!("  Straight:    {} in   => {} m", g(self.straight.inches), g(self.straight.meters)),
            format!("  Circular:    {} in   => {} m", g(self.circular.inches), g(self.circular.meters)),
            format!(
                "  Right-angle: {} in => {} m",
                g(self.right_angle.inches),
                g(self.right_angle.meters),
            ),
            String::new(),
            "PROPAGATION SPEED:".to_string(),
            "  c = 2.99792458e8 m/s".to_string(),
            format!("  v = c / sqrt(Er) = {} m/s", g(self.speed)),
            String::new(),
            "TRAVEL TIMES (picoseconds):".to_string(),
            format!("  Straight line:       {} ps", g(self.straight_ps)),
            format!("  Circular-bend line:  {} ps", g(self.circular_ps)),
            format!("  Right-angle bend:    {} ps", g(self.right_angle_ps)),
            String::new(),
            "TIME DIFFERENCE vs. STRAIGHT (ps):".to_string(),
            format!("  Straight - Circular:    {} ps", g(self.circular_delta_ps)),
            format!("  Straight - Right-angle: {} ps", g(self.right_angle_delta_ps)),
            REPORT_BANNER.to_string(),
        ]
        .join("\n")
    }
}
