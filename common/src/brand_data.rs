//! 組み込みブランドデータ
//!
//! 正規キー・表示名・エイリアス（韓国語表記、サブブランド含む）・ティア・原産国。
//! 異なるブランド間でエイリアスが重複する場合は後の行が優先される。

use crate::brand::BrandRecord;
use crate::types::BrandTier::{British, Heritage, Japan, Military, Other, Workwear};
use crate::types::BrandTier;

const fn brand(
    key: &'static str,
    canonical: &'static str,
    aliases: &'static [&'static str],
    tier: BrandTier,
    origin: &'static str,
) -> BrandRecord {
    BrandRecord { key, canonical, aliases, tier, origin }
}

pub(crate) static BUILTIN_BRANDS: &[BrandRecord] = &[
    // HERITAGE / JAPAN / BRITISH ARCHIVE
    brand("DOLCE&GABBANA", "Dolce & Gabbana", &["D&G", "돌체앤가바나", "돌체"], Heritage, "Italy"),
    brand("GUCCI", "Gucci", &["구찌"], Heritage, "Italy"),
    brand("PRADA", "Prada", &["프라다"], Heritage, "Italy"),
    brand("BURBERRY", "Burberry", &["버버리", "BURBERRYS"], British, "UK"),
    brand("YVES SAINT LAURENT", "Saint Laurent", &["YSL", "생로랑", "입생로랑", "SAINT LAURENT"], Heritage, "France"),
    brand("LANVIN", "Lanvin", &["랑방"], Heritage, "France"),
    brand("GIVENCHY", "Givenchy", &["지방시"], Heritage, "France"),
    brand("VALENTINO", "Valentino", &["발렌티노"], Heritage, "Italy"),
    brand("FENDI", "Fendi", &["펜디"], Heritage, "Italy"),
    brand("BOTTEGA VENETA", "Bottega Veneta", &["보테가베네타", "BV", "보테가"], Heritage, "Italy"),
    brand("HERMES", "Hermes", &["에르메스"], Heritage, "France"),
    brand("CELINE", "Celine", &["셀린느", "셀린"], Heritage, "France"),
    brand("LOEWE", "Loewe", &["로에베"], Heritage, "Spain"),
    brand("BALENCIAGA", "Balenciaga", &["발렌시아가"], Heritage, "France"),
    brand("VERSACE", "Versace", &["베르사체"], Heritage, "Italy"),
    brand("DIOR", "Dior", &["디올", "CHRISTIAN DIOR"], Heritage, "France"),
    brand("SALVATORE FERRAGAMO", "Ferragamo", &["페라가모", "FERRAGAMO"], Heritage, "Italy"),
    brand("MONCLER", "Moncler", &["몽클레르"], Heritage, "France"),
    brand("LOUIS VUITTON", "Louis Vuitton", &["루이비통", "LV"], Heritage, "France"),
    brand("CHANEL", "Chanel", &["샤넬"], Heritage, "France"),
    brand("GIORGIO ARMANI", "Giorgio Armani", &["조르지오아르마니"], Heritage, "Italy"),
    brand("TOM FORD", "Tom Ford", &["톰포드"], Heritage, "USA"),
    brand("ALEXANDER MCQUEEN", "Alexander McQueen", &["알렉산더맥퀸"], Heritage, "UK"),
    brand("ERMENEGILDO ZEGNA", "Zegna", &["제냐", "ZEGNA"], Heritage, "Italy"),
    brand("BRUNELLO CUCINELLI", "Brunello Cucinelli", &["브루넬로쿠치넬리"], Heritage, "Italy"),
    // PREMIUM
    brand("POLO RALPH LAUREN", "Polo Ralph Lauren", &["폴로 랄프로렌", "폴로", "랄프로렌", "RALPH LAUREN", "RRL"], Heritage, "USA"),
    brand("TOMMY HILFIGER", "Tommy Hilfiger", &["타미힐피거", "타미"], Heritage, "USA"),
    brand("LACOSTE", "Lacoste", &["라코스테"], Heritage, "France"),
    brand("FRED PERRY", "Fred Perry", &["프레드페리"], British, "UK"),
    brand("BROOKS BROTHERS", "Brooks Brothers", &["브룩스브라더스"], Heritage, "USA"),
    brand("HUGO BOSS", "Hugo Boss", &["휴고보스", "BOSS"], Heritage, "Germany"),
    brand("CALVIN KLEIN", "Calvin Klein", &["캘빈클라인", "CK"], Heritage, "USA"),
    brand("BARBOUR", "Barbour", &["바버"], British, "UK"),
    brand("AQUASCUTUM", "Aquascutum", &["아쿠아스큐텀"], British, "UK"),
    brand("PAUL SMITH", "Paul Smith", &["폴스미스"], British, "UK"),
    brand("EMPORIO ARMANI", "Emporio Armani", &["엠포리오아르마니", "EA7"], Heritage, "Italy"),
    brand("MAX MARA", "Max Mara", &["막스마라"], Heritage, "Italy"),
    brand("THEORY", "Theory", &["띠어리"], Heritage, "USA"),
    brand("SANDRO", "Sandro", &["산드로"], Heritage, "France"),
    brand("MAJE", "Maje", &["마쥬"], Heritage, "France"),
    brand("TED BAKER", "Ted Baker", &["테드베이커"], British, "UK"),
    brand("GANT", "Gant", &["간트"], Heritage, "USA"),
    brand("J.CREW", "J.Crew", &["제이크루"], Heritage, "USA"),
    brand("MARC JACOBS", "Marc Jacobs", &["마크제이콥스"], Heritage, "USA"),
    brand("COACH", "Coach", &["코치"], Heritage, "USA"),
    brand("MICHAEL KORS", "Michael Kors", &["마이클코어스", "MK"], Heritage, "USA"),
    brand("DIESEL", "Diesel", &["디젤"], Heritage, "Italy"),
    brand("KENZO", "Kenzo", &["겐조"], Heritage, "France"),
    brand("DUNHILL", "Dunhill", &["던힐"], British, "UK"),
    brand("MACKINTOSH", "Mackintosh", &["매킨토시"], British, "UK"),
    // DESIGNER
    brand("COMME DES GARCONS", "Comme des Garcons", &["꼼데가르송", "CDG", "PLAY"], Japan, "Japan"),
    brand("ISSEY MIYAKE", "Issey Miyake", &["이세이미야케", "PLEATS PLEASE"], Japan, "Japan"),
    brand("YOHJI YAMAMOTO", "Yohji Yamamoto", &["요지야마모토", "Y'S"], Japan, "Japan"),
    brand("VIVIENNE WESTWOOD", "Vivienne Westwood", &["비비안웨스트우드"], British, "UK"),
    brand("MAISON MARGIELA", "Maison Margiela", &["마르지엘라", "MARTIN MARGIELA", "MM6"], Heritage, "France"),
    brand("UNDERCOVER", "Undercover", &["언더커버"], Japan, "Japan"),
    brand("SACAI", "Sacai", &["사카이"], Japan, "Japan"),
    brand("STONE ISLAND", "Stone Island", &["스톤아일랜드"], Heritage, "Italy"),
    brand("A.P.C.", "A.P.C.", &["아페쎄", "APC"], Heritage, "France"),
    brand("ACNE STUDIOS", "Acne Studios", &["아크네", "ACNE"], Heritage, "Sweden"),
    brand("MARGARET HOWELL", "Margaret Howell", &["마가렛호웰", "MHL"], British, "UK"),
    brand("DRIES VAN NOTEN", "Dries Van Noten", &["드리스반노튼"], Heritage, "Belgium"),
    brand("NEEDLES", "Needles", &["니들스"], Japan, "Japan"),
    brand("VISVIM", "Visvim", &["비스빔"], Japan, "Japan"),
    brand("KAPITAL", "Kapital", &["캐피탈"], Japan, "Japan"),
    brand("NEIGHBORHOOD", "Neighborhood", &["네이버후드", "NBHD"], Japan, "Japan"),
    brand("WTAPS", "WTAPS", &["더블탭스"], Japan, "Japan"),
    brand("ENGINEERED GARMENTS", "Engineered Garments", &["엔지니어드가먼츠", "EG"], Heritage, "USA"),
    brand("RICK OWENS", "Rick Owens", &["릭오웬스"], Heritage, "USA"),
    brand("RAF SIMONS", "Raf Simons", &["라프시몬스"], Heritage, "Belgium"),
    brand("JIL SANDER", "Jil Sander", &["질샌더"], Heritage, "Germany"),
    brand("MARNI", "Marni", &["마르니"], Heritage, "Italy"),
    brand("LEMAIRE", "Lemaire", &["르메르"], Heritage, "France"),
    brand("OUR LEGACY", "Our Legacy", &["아워레가시"], Heritage, "Sweden"),
    brand("AMI", "AMI Paris", &["아미", "AMI PARIS"], Heritage, "France"),
    brand("HUMAN MADE", "Human Made", &["휴먼메이드"], Japan, "Japan"),
    brand("WACKO MARIA", "Wacko Maria", &["와코마리아"], Japan, "Japan"),
    brand("WHITE MOUNTAINEERING", "White Mountaineering", &["화이트마운티니어링"], Japan, "Japan"),
    brand("NIGEL CABOURN", "Nigel Cabourn", &["나이젤케이본"], British, "UK"),
    brand("SOPHNET", "Sophnet", &["소프넷"], Japan, "Japan"),
    // JAPAN ARCHIVE (CONTEMPORARY / CASUAL)
    brand("URBAN RESEARCH", "Urban Research", &["어반리서치", "어반 리서치"], Japan, "Japan"),
    brand("BEAMS", "Beams", &["빔즈", "BEAMS PLUS", "BEAMS BOY", "BEAMS T"], Japan, "Japan"),
    brand("UNITED ARROWS", "United Arrows", &["유나이티드아로우즈", "UA", "BEAUTY&YOUTH", "GREEN LABEL RELAXING"], Japan, "Japan"),
    brand("JOURNAL STANDARD", "Journal Standard", &["저널스탠다드"], Japan, "Japan"),
    brand("NANAMICA", "Nanamica", &["나나미카"], Japan, "Japan"),
    brand("SHIPS", "Ships", &["쉽스"], Japan, "Japan"),
    brand("TOMORROWLAND", "Tomorrowland", &["투모로우랜드"], Japan, "Japan"),
    brand("NANO UNIVERSE", "Nano Universe", &["나노유니버스"], Japan, "Japan"),
    brand("STUDIOUS", "Studious", &["스튜디오스"], Japan, "Japan"),
    brand("COS", "COS", &["코스"], Heritage, "Sweden"),
    brand("MUJI", "Muji", &["무인양품", "MUJI LABO", "무지"], Japan, "Japan"),
    brand("LOWRYS FARM", "Lowrys Farm", &["로리즈팜"], Japan, "Japan"),
    brand("GLOBAL WORK", "Global Work", &["글로벌워크"], Japan, "Japan"),
    brand("COEN", "Coen", &["코엔"], Japan, "Japan"),
    brand("SENSE OF PLACE", "Sense of Place", &["센스오브플레이스"], Japan, "Japan"),
    brand("AZUL BY MOUSSY", "Azul by Moussy", &["아주르", "아주르 바이 모우지", "MOUSSY"], Japan, "Japan"),
    brand("FREAK'S STORE", "Freak's Store", &["프릭스스토어"], Japan, "Japan"),
    brand("EDIFICE", "Edifice", &["에디피스"], Japan, "Japan"),
    brand("IENA", "Iena", &["이에나"], Japan, "Japan"),
    brand("SPICK AND SPAN", "Spick and Span", &["스픽앤스판"], Japan, "Japan"),
    brand("ADAM ET ROPE", "Adam et Rope", &["아담에로페"], Japan, "Japan"),
    brand("DESIGNWORKS", "Designworks", &["디자인웍스"], Japan, "Japan"),
    brand("AXES FEMME", "Axes Femme", &["액시즈팜"], Japan, "Japan"),
    brand("ROPE PICNIC", "Rope Picnic", &["로프피크닉"], Japan, "Japan"),
    brand("NICE CLAUP", "Nice Claup", &["나이스클랍"], Japan, "Japan"),
    brand("SNIDEL", "Snidel", &["스나이델"], Japan, "Japan"),
    brand("FRAY I.D", "Fray I.D", &["프레이아이디"], Japan, "Japan"),
    brand("BEAUTY&YOUTH", "Beauty & Youth", &["뷰티앤유스"], Japan, "Japan"),
    brand("GOLDEN BEAR", "Golden Bear", &["골든베어", "잭니클라우스"], Heritage, "USA"),
    brand("HONEYSUCKLE ROSE", "Honeysuckle Rose", &["허니서클로즈"], Japan, "Japan"),
    brand("AS KNOW AS", "As Know As", &["애즈노애즈", "AS KNOW AS PINKY"], Japan, "Japan"),
    // HERITAGE / BRITISH / OTHER (SPORTS & CASUAL)
    brand("NIKE", "Nike", &["나이키"], Heritage, "USA"),
    brand("ADIDAS", "Adidas", &["아디다스", "ADIDAS NEO", "ADIDAS ORIGINALS"], Heritage, "Germany"),
    brand("FILA", "Fila", &["필라"], Heritage, "Italy"),
    brand("PUMA", "Puma", &["푸마"], Heritage, "Germany"),
    brand("NEW BALANCE", "New Balance", &["뉴발란스", "NB"], Heritage, "USA"),
    brand("REEBOK", "Reebok", &["리복"], Heritage, "UK"),
    brand("CONVERSE", "Converse", &["컨버스"], Heritage, "USA"),
    brand("CHAMPION", "Champion", &["챔피온"], Heritage, "USA"),
    brand("STUSSY", "Stussy", &["스투시"], Heritage, "USA"),
    brand("VANS", "Vans", &["반스"], Heritage, "USA"),
    brand("ASICS", "Asics", &["아식스"], Japan, "Japan"),
    brand("UNDER ARMOUR", "Under Armour", &["언더아머", "UA"], Heritage, "USA"),
    brand("KAPPA", "Kappa", &["카파"], Heritage, "Italy"),
    brand("ELLESSE", "Ellesse", &["엘레쎄"], Heritage, "Italy"),
    brand("UMBRO", "Umbro", &["엄브로"], British, "UK"),
    brand("MIZUNO", "Mizuno", &["미즈노"], Japan, "Japan"),
    brand("DESCENTE", "Descente", &["데상트"], Japan, "Japan"),
    brand("UNIQLO", "Uniqlo", &["유니클로"], Japan, "Japan"),
    brand("GAP", "Gap", &["갭"], Other, "USA"),
    brand("H&M", "H&M", &["에이치앤엠"], Other, "Sweden"),
    brand("ZARA", "Zara", &["자라"], Other, "Spain"),
    brand("LEVI'S", "Levi's", &["리바이스", "LEVIS"], Heritage, "USA"),
    brand("LEE", "Lee", &["리"], Heritage, "USA"),
    brand("WRANGLER", "Wrangler", &["랭글러"], Heritage, "USA"),
    brand("BANANA REPUBLIC", "Banana Republic", &["바나나리퍼블릭"], Other, "USA"),
    brand("OLD NAVY", "Old Navy", &["올드네이비"], Other, "USA"),
    brand("MANGO", "Mango", &["망고"], Other, "Spain"),
    brand("TOPSHOP", "Topshop", &["탑샵"], Other, "UK"),
    brand("BERSHKA", "Bershka", &["베르쉬카"], Other, "Spain"),
    brand("FOREVER 21", "Forever 21", &["포에버21"], Other, "USA"),
    brand("PULL&BEAR", "Pull & Bear", &["풀앤베어"], Other, "Spain"),
    brand("GU", "GU", &["지유"], Japan, "Japan"),
    brand("ESPRIT", "Esprit", &["에스프리"], Other, "USA"),
    // HERITAGE / OTHER (OUTDOOR)
    brand("THE NORTH FACE", "The North Face", &["노스페이스", "TNF"], Heritage, "USA"),
    brand("PATAGONIA", "Patagonia", &["파타고니아"], Heritage, "USA"),
    brand("ARC'TERYX", "Arc'teryx", &["아크테릭스", "ARCTERYX"], Heritage, "Canada"),
    brand("COLUMBIA", "Columbia", &["컬럼비아"], Other, "USA"),
    brand("HELLY HANSEN", "Helly Hansen", &["헬리한센"], Heritage, "Norway"),
    brand("PENDLETON", "Pendleton", &["펜들턴"], Heritage, "USA"),
    brand("WOOLRICH", "Woolrich", &["울리치"], Heritage, "USA"),
    brand("L.L.BEAN", "L.L.Bean", &["엘엘빈", "LL BEAN", "LLBEAN"], Heritage, "USA"),
    brand("EDDIE BAUER", "Eddie Bauer", &["에디바우어"], Heritage, "USA"),
    brand("SIERRA DESIGNS", "Sierra Designs", &["시에라디자인"], Heritage, "USA"),
    brand("MONT-BELL", "Mont-bell", &["몽벨", "MONTBELL"], Japan, "Japan"),
    brand("MAMMUT", "Mammut", &["마무트"], Heritage, "Switzerland"),
    brand("SALOMON", "Salomon", &["살로몬"], Heritage, "France"),
    brand("MARMOT", "Marmot", &["마모트"], Heritage, "USA"),
    brand("K2", "K2", &["케이투"], Other, "Korea"),
    brand("BLACK YAK", "Black Yak", &["블랙야크"], Other, "Korea"),
    brand("KOLON SPORT", "Kolon Sport", &["코오롱스포츠"], Other, "Korea"),
    // WORKWEAR
    brand("CARHARTT", "Carhartt", &["칼하트", "CARHARTT WIP"], Workwear, "USA"),
    brand("DICKIES", "Dickies", &["디키즈"], Workwear, "USA"),
    brand("RED KAP", "Red Kap", &["레드캡", "REDKAP"], Workwear, "USA"),
    brand("BEN DAVIS", "Ben Davis", &["벤데이비스", "BENDAVIS"], Workwear, "USA"),
    brand("FILSON", "Filson", &["필슨"], Workwear, "USA"),
    brand("POINTER", "Pointer", &["포인터", "POINTER BRAND"], Workwear, "USA"),
    brand("ROUND HOUSE", "Round House", &["라운드하우스", "ROUNDHOUSE"], Workwear, "USA"),
    brand("STAN RAY", "Stan Ray", &["스탠레이", "STANRAY"], Workwear, "USA"),
    brand("KEY IMPERIAL", "Key Imperial", &["키임페리얼"], Workwear, "USA"),
    // MILITARY
    brand("ALPHA INDUSTRIES", "Alpha Industries", &["알파인더스트리즈", "ALPHA"], Military, "USA"),
    brand("ROTHCO", "Rothco", &["로스코"], Military, "USA"),
    brand("PROPPER", "Propper", &["프로퍼"], Military, "USA"),
    brand("BUZZ RICKSON'S", "Buzz Rickson's", &["버즈릭슨", "BUZZ RICKSONS"], Military, "Japan"),
    brand("THE REAL MCCOY'S", "The Real McCoy's", &["리얼맥코이", "REAL MCCOY'S", "REAL MCCOYS"], Military, "Japan"),

    // BRITISH OUTERWEAR
    brand("BELSTAFF", "Belstaff", &["벨스타프"], British, "UK"),
    brand("GRENFELL", "Grenfell", &["그렌펠"], British, "UK"),
    brand("BARACUTA", "Baracuta", &["바라쿠타"], British, "UK"),
    brand("GLOVERALL", "Gloverall", &["글로버올"], British, "UK"),
];
