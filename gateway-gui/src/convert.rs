use rust_decimal::{Decimal, RoundingStrategy};

use crate::transaction::AMOUNT_DECIMALS;

/// Converts a source amount into the amount credited on the destination side.
pub trait ReceiveAmount {
    /// `None` when the amount is out of the range the conversion can represent.
    fn receive_amount(&self, amount: Decimal) -> Option<Decimal>;
}

/// Gateway fee taken as a percentage of the deposited amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    fee_percent: Decimal,
}

impl FeeSchedule {
    pub fn new(fee_percent: Decimal) -> Self {
        Self { fee_percent }
    }
}

impl ReceiveAmount for FeeSchedule {
    fn receive_amount(&self, amount: Decimal) -> Option<Decimal> {
        let fee = amount
            .checked_mul(self.fee_percent)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(
            amount
                .checked_sub(fee)?
                .round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointNearestEven)
                .max(Decimal::ZERO)
                .normalize(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_fee_schedule() {
        let free = FeeSchedule::new(Decimal::ZERO);
        assert_eq!(free.receive_amount(dec!(10)), Some(dec!(10)));

        let fee = FeeSchedule::new(dec!(0.5));
        assert_eq!(fee.receive_amount(dec!(10)), Some(dec!(9.95)));
        assert_eq!(fee.receive_amount(dec!(10)).unwrap().to_string(), "9.95");
        assert_eq!(fee.receive_amount(Decimal::ZERO), Some(Decimal::ZERO));

        // 0.00000001 * 0.995 rounds to the closest satoshi-like unit
        assert_eq!(fee.receive_amount(dec!(0.00000001)), Some(dec!(0.00000001)));

        let everything = FeeSchedule::new(dec!(150));
        assert_eq!(everything.receive_amount(dec!(1)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_fee_schedule_huge_amount() {
        let amount = crate::transaction::parse_amount("79228162514264337593543950335").unwrap();
        assert_eq!(amount, Decimal::MAX);
        assert_eq!(FeeSchedule::new(dec!(2)).receive_amount(amount), None);
        assert_eq!(
            FeeSchedule::new(Decimal::ZERO).receive_amount(amount),
            Some(Decimal::MAX)
        );
    }
}
