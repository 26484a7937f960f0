use crate::models::Side;
use crate::oven::constants::SLICES_PER_SIDE;

/// Break per-topping slice totals into box halves.
///
/// Each topping yields as many full halves as it has groups of four slices,
/// then one partial half for any remainder. Halves of one topping stay
/// contiguous and toppings keep the order they were given in.
pub fn decompose_sides(totals: &[(String, u32)]) -> Vec<Side> {
    let mut sides = Vec::new();

    for (topping, total) in totals {
        let mut slices_left = *total;

        while slices_left >= SLICES_PER_SIDE {
            sides.push(Side::full(topping.as_str()));
            slices_left -= SLICES_PER_SIDE;
        }

        if slices_left > 0 {
            sides.push(Side::partial(topping.as_str(), slices_left));
        }
    }

    sides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SideKind;

    fn kinds(sides: &[Side]) -> Vec<SideKind> {
        sides.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_remainder_becomes_partial() {
        let sides = decompose_sides(&[("Cheese".to_string(), 10)]);
        assert_eq!(
            kinds(&sides),
            vec![SideKind::Full, SideKind::Full, SideKind::Partial]
        );
        assert_eq!(sides[2].slices, 2);
    }

    #[test]
    fn test_multiple_of_four_only_full() {
        let sides = decompose_sides(&[("Cheese".to_string(), 12)]);
        assert_eq!(sides.len(), 3);
        assert!(sides.iter().all(|s| s.kind == SideKind::Full));
    }

    #[test]
    fn test_zero_slices_yield_nothing() {
        assert!(decompose_sides(&[("Cheese".to_string(), 0)]).is_empty());
    }

    #[test]
    fn test_toppings_stay_contiguous() {
        let sides = decompose_sides(&[("Ham".to_string(), 5), ("Olive".to_string(), 3)]);
        let toppings: Vec<&str> = sides.iter().map(|s| s.topping.as_str()).collect();
        assert_eq!(toppings, vec!["Ham", "Ham", "Olive"]);
        assert_eq!(sides[1].slices, 1);
        assert_eq!(sides[2].slices, 3);
    }
}
