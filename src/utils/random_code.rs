use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 班级邀请码长度
pub const INVITE_CODE_LEN: usize = 7;

/// 生成由小写字母和数字组成的随机码
pub fn generate_random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn generate_invite_code() -> String {
    generate_random_code(INVITE_CODE_LEN)
}
