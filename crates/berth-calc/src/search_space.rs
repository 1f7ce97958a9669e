//! 搜尋空間規模計算
//!
//! 候補航線數為 Σ_{k=1}^{K} C(n,k)·k!（K = min(最大變更次數+1, n)），
//! 對 n 為階乘級成長。這是設計上的複雜度契約：核心不做內部截斷，
//! 呼叫端應以此函數評估輸入規模是否可行。

/// 計算候補航線總數
///
/// C(n,k)·k! = n·(n-1)·…·(n-k+1)（下降階乘），逐項累加。
/// 極端輸入以飽和運算停在 `u128::MAX`。
pub fn candidate_route_count(num_silos: usize, max_berth_changes: u32) -> u128 {
    let n = num_silos as u128;
    let max_stops = (u128::from(max_berth_changes) + 1).min(n);

    let mut total: u128 = 0;
    let mut falling: u128 = 1;

    for k in 1..=max_stops {
        falling = falling.saturating_mul(n - (k - 1));
        total = total.saturating_add(falling);
    }

    total
}
