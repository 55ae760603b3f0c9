//! 韩文翻译 (ko-KR)

use super::keys::{
    AddressesTexts, CommonTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "펀딩기프트 배송지 선택",
        quit: "종료",
        back: "뒤로",
    },

    hints: HintTexts {
        move_up_down: "이동",
        select: "선택",
        clear: "선택 해제",
        help: "도움말",
    },

    addresses: AddressesTexts {
        title: "배송지",
        empty: "저장된 배송지가 없습니다",
        empty_hint: "프로필에서 배송지를 추가해 주세요",
        default_badge: "기본 배송지",
        selected_badge: "선택됨",
        zip_code: "우편번호",
    },

    status: StatusTexts {
        selected: "배송지",
        cleared: "선택이 해제되었습니다",
        select_failed: "배송지를 선택할 수 없습니다",
        drifted: "선택한 배송지가 목록에 없습니다",
        reloaded: "배송지 목록을 다시 불러왔습니다",
        reload_ignored: "목록이 고정되어 있어 다시 불러오지 않았습니다",
        reload_failed: "배송지 목록을 다시 불러오지 못했습니다",
    },

    help: HelpTexts {
        title: "도움말",
        move_cursor: "커서 이동",
        jump: "처음 / 마지막 배송지",
        select: "배송지 선택",
        clear: "선택 해제",
        reload: "배송지 다시 불러오기",
        close: "도움말 닫기",
        quit: "종료",
    },
};
