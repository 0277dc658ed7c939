use std::fmt;

// --- 構造体定義 ---

/// ICOコンテナへ格納する、検証済みの単一画像データ。
///
/// 中身は圧縮済みの静止画エンコード (この用途ではPNG) のバイト列を
/// 不透明なペイロードとして保持します。ペイロードの内部構造は検証しません。
/// 一方で、コンテナの1バイト寸法表現に収まらない値や空のペイロードは
/// コンストラクタで弾き、不正なコンテナを作ってしまう前に失敗させます。
#[derive(Debug, PartialEq)]
pub struct IconImage {
    data: Vec<u8>,
    size: u32,
}

// --- エラー定義 ---

/// `IconImage` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum IconValidationError {
    /// 画像データが空の場合に返されるエラー。
    EmptyData,
    /// 寸法が1バイト表現の範囲外 (0 または 257 以上) の場合に返されるエラー。
    InvalidSize(u32),
}

// --- 実装ブロック ---

impl IconImage {
    /// 新しい `IconImage` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `data`: 圧縮済み静止画のバイト列 (PNGなど)。中身は検証しない。
    /// * `size`: 正方形画像の一辺 (px)。`1..=256` を受け付ける。
    ///   ディレクトリエントリの寸法フィールドは1バイトで、慣例として
    ///   `0` が 256 を表すため、256 はそのまま受理して `0` にエンコードされる。
    ///
    /// # 戻り値
    /// * `Ok(IconImage)`: 検証を通過した場合。
    /// * `Err(IconValidationError)`: データが空か、寸法が範囲外の場合。
    pub fn new(data: Vec<u8>, size: u32) -> Result<Self, IconValidationError> {
        if data.is_empty() {
            return Err(IconValidationError::EmptyData);
        }
        if size == 0 || size > 256 {
            return Err(IconValidationError::InvalidSize(size));
        }
        Ok(Self { data, size })
    }

    /// ディレクトリエントリに書き込む1バイト寸法値を返します (256 は 0)。
    pub fn encoded_size(&self) -> u8 {
        if self.size == 256 {
            0
        } else {
            self.size as u8
        }
    }

    // --- ゲッターメソッド ---

    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub fn size(&self) -> u32 {
        self.size
    }
    /// ペイロードのバイト長を返します。
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// --- トレイト実装 ---

impl fmt::Display for IconValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconValidationError::EmptyData => {
                write!(f, "画像データが空です。1バイト以上のペイロードを渡してください。")
            }
            IconValidationError::InvalidSize(size) => {
                write!(
                    f,
                    "寸法 {} はICOの1バイト表現の範囲外です (1..=256 が必要です)。",
                    size
                )
            }
        }
    }
}

impl std::error::Error for IconValidationError {}

// --- テストモジュール ---
