//! Built-in first-aid answers served without contacting the LLM.

/// One canned answer and the keywords that trigger it.
///
/// Keywords may be written with or without Vietnamese tone marks; they are
/// compared after [`crate::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalQaEntry {
    /// Stable identifier, used in logs.
    pub id: &'static str,
    /// Ordered trigger phrases.
    pub keywords: &'static [&'static str],
    /// Answer returned verbatim to the client.
    pub answer: &'static str,
}

/// Entries in lookup order. The first entry with a matching keyword wins.
pub static LOCAL_QA: &[LocalQaEntry] = &[
    LocalQaEntry {
        id: "trayxuoc_basic",
        keywords: &["tray xuoc", "trầy xước", "xay da", "tia vet tray"],
        answer: "Nếu bạn bị trầy xước nhẹ, có thể làm như sau:\n\
            1. Rửa tay sạch với xà phòng.\n\
            2. Rửa vết thương dưới vòi nước mát để loại bỏ bụi bẩn.\n\
            3. Dùng khăn sạch/gạc lau khô nhẹ.\n\
            4. Sát khuẩn nhẹ bằng povidone-iodine hoặc chlorhexidine.\n\
            5. Băng lại nếu vùng da dễ bị cọ xát.\n\
            \n\
            Nếu sưng nhiều, đau tăng, chảy mủ hoặc sốt → đi khám bác sĩ.",
    },
    LocalQaEntry {
        id: "bong_muc1",
        keywords: &["bong muc 1", "bỏng mức 1", "bong nhe"],
        answer: "Bỏng mức 1 thường chỉ đỏ da và rát nhẹ. Cách xử lý:\n\
            1. Làm mát vùng bỏng bằng nước mát chạy liên tục 10–20 phút.\n\
            2. Không dùng kem đánh răng, nước mắm, dầu gió...\n\
            3. Giữ vùng da sạch và khô.\n\
            4. Cơn đau có thể giảm với paracetamol (đúng liều).\n\
            \n\
            Nếu bỏng diện rộng hoặc ở mặt, hãy đi khám để được đánh giá chi tiết.",
    },
    LocalQaEntry {
        id: "khi_nao_di_benh_vien",
        keywords: &[
            "khi nao di benh vien",
            "luc nao can di benh vien",
            "co can di vien khong",
        ],
        answer: "Bạn nên đi bệnh viện ngay nếu:\n\
            - Bỏng mức 3, bỏng sâu, da trắng bệch hoặc cháy đen.\n\
            - Vết rách sâu, chảy máu không cầm sau 10–15 phút.\n\
            - Vết thương ở mắt, mặt, bộ phận sinh dục.\n\
            - Có dấu hiệu nhiễm trùng: đỏ – sưng – nóng – đau – chảy mủ – sốt.\n\
            \n\
            Trong các trường hợp này, sơ cứu tại nhà không đủ, cần bác sĩ kiểm tra.",
    },
];
