//! 航線候補產生

use berth_core::Route;

/// 航線候補產生器
///
/// 對 k = 1..=min(最大變更次數+1, 筒倉數)，列舉 k 個相異筒倉的所有組合，
/// 再對每個組合列舉所有排列。窮舉式列舉，候補數為
/// Σ C(n,k)·k!，核心不設內部上限，由呼叫端控制輸入規模。
pub struct RoutePlanGenerator;

impl RoutePlanGenerator {
    /// 產生所有候補航線
    ///
    /// `silo_names` 的順序決定產生順序；呼叫端若需要確定性的排名平手
    /// 順序，應傳入排序後的名稱列表。
    pub fn generate(silo_names: &[String], max_berth_changes: u32) -> Vec<Route> {
        let n = silo_names.len();
        let max_stops = (max_berth_changes as usize + 1).min(n);

        let mut plans = Vec::new();

        for num_stops in 1..=max_stops {
            for combination in Self::combinations(silo_names, num_stops) {
                for order in Self::permutations(&combination) {
                    plans.push(Route::new(order));
                }
            }
        }

        plans
    }

    /// 列舉 k 個元素的組合（與輸入順序一致）
    fn combinations(names: &[String], k: usize) -> Vec<Vec<String>> {
        let mut result = Vec::new();
        let mut current = Vec::with_capacity(k);
        Self::collect_combinations(names, k, 0, &mut current, &mut result);
        result
    }

    fn collect_combinations(
        names: &[String],
        k: usize,
        start: usize,
        current: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }

        for i in start..names.len() {
            current.push(names[i].clone());
            Self::collect_combinations(names, k, i + 1, current, out);
            current.pop();
        }
    }

    /// 列舉所有排列（依元素在組合內的順序決定輸出順序）
    fn permutations(items: &[String]) -> Vec<Vec<String>> {
        let mut result = Vec::new();
        let mut current = Vec::with_capacity(items.len());
        let mut used = vec![false; items.len()];
        Self::collect_permutations(items, &mut used, &mut current, &mut result);
        result
    }

    fn collect_permutations(
        items: &[String],
        used: &mut [bool],
        current: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if current.len() == items.len() {
            out.push(current.clone());
            return;
        }

        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(items[i].clone());
            Self::collect_permutations(items, used, current, out);
            current.pop();
            used[i] = false;
        }
    }
}
