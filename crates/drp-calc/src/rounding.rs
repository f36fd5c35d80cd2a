//! 訂購量整批化
//!
//! 把任意需求量調整成同時符合訂購批量（lot）與最小訂購量（MOQ）
//! 的合法訂購量。介於 0 與 MOQ 之間的值不是合法訂購量。

/// 調整方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// 加一批
    Increment,
    /// 減一批
    Decrement,
}

/// 整批化計算器
pub struct RoundingCalculator;

impl RoundingCalculator {
    /// 缺口量向上取整到批量倍數，再套用最小訂購量
    ///
    /// 批量為 0 時視為 1，避免除以零。
    /// 呼叫端只在缺口 > 0 時使用；缺口為 0 會直接得到 MOQ。
    pub fn round_up_to_lot(shortage_cs: u32, lot_cs: u32, moq_cs: u32) -> u32 {
        let lot = lot_cs.max(1);
        let lot_adjusted = shortage_cs.div_ceil(lot) * lot;
        lot_adjusted.max(moq_cs)
    }

    /// 以批量為步距調整擬訂購量
    ///
    /// 加量時從 0 起步直接跳到 max(批量, MOQ)；
    /// 減量後低於 MOQ 即歸零，且永不為負。
    pub fn step(current: u32, lot_cs: u32, moq_cs: u32, direction: StepDirection) -> u32 {
        let lot = lot_cs.max(1);
        match direction {
            StepDirection::Increment => {
                if current == 0 {
                    lot.max(moq_cs)
                } else {
                    current + lot
                }
            }
            StepDirection::Decrement => {
                let next = current.saturating_sub(lot);
                if next < moq_cs {
                    0
                } else {
                    next
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // 450 已是 10 的倍數且高於 MOQ，不需調整
    #[case(450, 10, 20, 450)]
    // 451 → 向上取整到 460
    #[case(451, 10, 20, 460)]
    // 取整後仍低於 MOQ → 套用 MOQ
    #[case(1, 10, 20, 20)]
    #[case(5, 5, 20, 20)]
    // 批量 0 視為 1
    #[case(7, 0, 10, 10)]
    #[case(37, 0, 10, 37)]
    // 缺口 0 → 直接得到 MOQ
    #[case(0, 10, 20, 20)]
    fn test_round_up_to_lot(
        #[case] shortage: u32,
        #[case] lot: u32,
        #[case] moq: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(RoundingCalculator::round_up_to_lot(shortage, lot, moq), expected);
    }

    #[test]
    fn test_step_increment_from_zero() {
        // 從 0 起步直接跳到 max(批量, MOQ)
        assert_eq!(
            RoundingCalculator::step(0, 5, 10, StepDirection::Increment),
            10
        );
        assert_eq!(
            RoundingCalculator::step(0, 15, 10, StepDirection::Increment),
            15
        );
    }

    #[test]
    fn test_step_increment_adds_one_lot() {
        assert_eq!(
            RoundingCalculator::step(20, 10, 20, StepDirection::Increment),
            30
        );
    }

    #[test]
    fn test_step_decrement_snaps_to_zero_below_moq() {
        // 30 - 10 = 20，仍在 MOQ 上 → 保留
        assert_eq!(
            RoundingCalculator::step(30, 10, 20, StepDirection::Decrement),
            20
        );
        // 20 - 10 = 10，低於 MOQ 20 → 歸零
        assert_eq!(
            RoundingCalculator::step(20, 10, 20, StepDirection::Decrement),
            0
        );
    }

    #[test]
    fn test_step_decrement_never_negative() {
        assert_eq!(
            RoundingCalculator::step(5, 10, 0, StepDirection::Decrement),
            0
        );
        assert_eq!(
            RoundingCalculator::step(0, 10, 0, StepDirection::Decrement),
            0
        );
    }

    #[test]
    fn test_step_round_trip_at_boundary() {
        // 0 → 加量 → 10；再減量 → 5 低於 MOQ 10 → 歸零
        let up = RoundingCalculator::step(0, 5, 10, StepDirection::Increment);
        assert_eq!(up, 10);
        let down = RoundingCalculator::step(up, 5, 10, StepDirection::Decrement);
        assert_eq!(down, 0); // 10 - 5 = 5，低於 MOQ 10
    }
}
