/// 最大公因數。`gcd(0, 0) == 0`，呼叫端須自行處理此情況。
pub fn gcd(a: u64, b: u64) -> u64 {
    num_integer::gcd(a, b)
}
