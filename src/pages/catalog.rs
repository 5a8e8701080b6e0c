//! Static service catalog shown on the home page.

pub const COMPANY_NAME: &str = "Grupo RaVal";
pub const TAGLINE: &str = "Transformando ideias em soluções digitais e visuais de qualidade.";

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

pub enum Media {
    Plain,
    Video(&'static str),
    Carousel(&'static [Photo]),
}

pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub media: Media,
}

pub struct SectionIntro {
    pub icon: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
}

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "</>", title: "Software", caption: "Desenvolvimento personalizado" },
    Highlight { icon: "🖌", title: "Design", caption: "Identidade visual completa" },
    Highlight { icon: "👕", title: "Personalização", caption: "Produtos únicos" },
    Highlight { icon: "🪧", title: "Acrílico", caption: "Placas qr code e Cartões de visita" },
];

pub const SOFTWARE_INTRO: SectionIntro = SectionIntro {
    icon: "</>",
    title: "Desenvolvimento de Software",
    lead: "Criamos soluções tecnológicas sob medida para automatizar processos, aumentar a produtividade e impulsionar o crescimento do seu negócio.",
};

/// One card per reveal step, in reveal order.
pub const SOFTWARE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "</>",
        title: "Sistemas Web",
        description: "Aplicações web modernas e responsivas para gestão empresarial",
        items: &["ERPs e CRMs personalizados", "E-commerce completo", "Dashboards e relatórios", "Integração com APIs"],
        media: Media::Plain,
    },
    ServiceCard {
        icon: "</>",
        title: "Apps Mobile",
        description: "Aplicativos nativos para iOS e Android",
        items: &["Interface intuitiva", "Performance otimizada", "Sincronização offline", "Push notifications"],
        media: Media::Plain,
    },
    ServiceCard {
        icon: "</>",
        title: "Automação",
        description: "Scripts e sistemas para automatizar tarefas repetitivas",
        items: &["RPA e bots", "Integração de sistemas", "Relatórios automáticos", "Backup e monitoramento"],
        media: Media::Plain,
    },
];

pub const DESIGN_INTRO: SectionIntro = SectionIntro {
    icon: "🖌",
    title: "Design & Social Media",
    lead: "Criamos identidades visuais marcantes e gerenciamos sua presença digital para destacar sua marca no mercado competitivo.",
};

pub const DESIGN_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "🖌",
        title: "Design Gráfico",
        description: "Identidade visual completa para sua marca",
        items: &[
            "Logotipos e identidade visual",
            "Material impresso (cartões de visitas, flyers, catálogos)",
            "Embalagens e rótulos",
            "Apresentações corporativas",
            "Manual da marca",
        ],
        media: Media::Video("/assets/videos/videocard.mp4"),
    },
    ServiceCard {
        icon: "🔗",
        title: "Social Media",
        description: "Gestão completa da sua presença digital",
        items: &[
            "Criação de conteúdo visual",
            "Planejamento de posts",
            "Gestão de campanhas publicitárias",
            "Relatórios de performance",
            "Estratégia de engajamento",
        ],
        media: Media::Video("/assets/videos/videoplayback.mp4"),
    },
];

pub const CUSTOMIZATION_INTRO: SectionIntro = SectionIntro {
    icon: "👕",
    title: "Personalização de Produtos",
    lead: "Personalizamos uma ampla variedade de produtos para promover sua marca, criar uniformes corporativos ou presentes únicos.",
};

pub const CUSTOMIZATION_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "👕",
        title: "Vestuário",
        description: "Uniformes e roupas personalizadas",
        items: &["Camisetas e polos", "Camisas e bermudas", "Uniformes profissionais", "Bonés e chapéus", "Aventais e jalecos"],
        media: Media::Carousel(&[
            Photo { src: "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=300&h=200&fit=crop", alt: "Camisetas personalizadas" },
            Photo { src: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=300&h=200&fit=crop", alt: "Uniformes profissionais" },
            Photo { src: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=300&h=200&fit=crop", alt: "Bonés personalizados" },
        ]),
    },
    ServiceCard {
        icon: "☕",
        title: "Brindes",
        description: "Produtos promocionais personalizados",
        items: &["Canecas e copos", "Squeezes e garrafas", "Chaveiros e brindes", "Bolsas e mochilas"],
        media: Media::Carousel(&[
            Photo { src: "https://images.unsplash.com/photo-1544787219-7f47ccb76574?w=300&h=200&fit=crop", alt: "Canecas personalizadas" },
            Photo { src: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=200&fit=crop", alt: "Brindes corporativos" },
        ]),
    },
    ServiceCard {
        icon: "🔗",
        title: "Acrílicos Premium",
        description: "Tecnologia QR Code & NFC",
        items: &[
            "Placas de QR Code personalizadas",
            "Tags de Acrílico personalizadas",
            "Cartões de visita com NFC",
            "QR Code integrado com website",
            "Impressão de alta durabilidade",
            "Design personalizado e exclusivo",
        ],
        media: Media::Carousel(&[
            Photo { src: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=300&h=200&fit=crop", alt: "Placas de acrílico" },
            Photo { src: "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=300&h=200&fit=crop", alt: "QR Code personalizado" },
            Photo { src: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=300&h=200&fit=crop", alt: "Cartões NFC" },
        ]),
    },
];

pub const SIGNAGE_INTRO: SectionIntro = SectionIntro {
    icon: "🪧",
    title: "Sinalização",
    lead: "Placas de QR code e cartões de visita para orientar, informar e promover. Desde projetos simples até sistemas complexos de sinalização.",
};

pub const SIGNAGE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "🪧",
        title: "Sinalização Interna",
        description: "Orientação e comunicação dentro do ambiente",
        items: &["Placas direcionais e informativas", "Identificação de salas e setores", "Sinalização de segurança"],
        media: Media::Plain,
    },
    ServiceCard {
        icon: "🪧",
        title: "Sinalização Externa",
        description: "Placas e cartões de visitas para comunicação visual",
        items: &["Placas em Metal", "Identificação em portas externas", "Placas de identificação"],
        media: Media::Plain,
    },
];

/// (step title, detail)
pub const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Análise do local", "Avaliação das necessidades específicas"),
    ("Projeto personalizado", "Desenvolvimento da solução ideal"),
    ("Produção de qualidade", "Materiais duráveis e resistentes"),
    ("Instalação profissional", "Garantia de 2 anos"),
];

pub const CONTACT_INTRO: SectionIntro = SectionIntro {
    icon: "✉",
    title: "Entre em Contato",
    lead: "Solicite um orçamento sem compromisso ou tire suas dúvidas. Nossa equipe está pronta para transformar suas ideias em realidade.",
};

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "☎", title: "Telefone", value: "(11) 99999-9999", note: "Segunda a sexta, 8h às 18h" },
    ContactChannel { icon: "✉", title: "Email", value: "contato@gruporaval.com.br", note: "Resposta em até 24h" },
    ContactChannel { icon: "📍", title: "Localização", value: "São Paulo, SP", note: "Atendemos todo o Brasil" },
];

pub const BADGES: &[&str] = &["Orçamento Gratuito", "Entrega Rápida", "Suporte Técnico", "Garantia de Qualidade"];

pub const OPENING_HOURS: &[&str] = &["Segunda a Sexta: 8h às 18h", "Sábado: 8h às 12h", "Domingo: Fechado"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealVariant;

    #[test]
    fn one_software_card_per_reveal_step() {
        assert_eq!(SOFTWARE_CARDS.len(), RevealVariant::ALL.len());
    }

    #[test]
    fn every_card_lists_something() {
        let all = SOFTWARE_CARDS
            .iter()
            .chain(DESIGN_CARDS)
            .chain(CUSTOMIZATION_CARDS)
            .chain(SIGNAGE_CARDS);
        for card in all {
            assert!(!card.items.is_empty(), "{} has no items", card.title);
        }
    }
}
